//! Private-node gating for sampled tables.

use causeway_core::constants::is_private;

/// Which nodes a sampled table may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Every node, private ones included.
    All,
    /// Only nodes whose name lacks the private marker.
    PublicOnly,
}

impl Visibility {
    /// `All` only when the model has a secret and the caller supplied the
    /// same one.
    pub fn resolve(model_secret: Option<&str>, caller_secret: Option<&str>) -> Self {
        match (model_secret, caller_secret) {
            (Some(expected), Some(given)) if expected == given => Self::All,
            _ => Self::PublicOnly,
        }
    }

    pub fn admits(self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::PublicOnly => !is_private(name),
        }
    }

    /// Filter `order` down to admitted names, keeping order.
    pub fn filter<'a>(self, order: &'a [String]) -> Vec<&'a str> {
        order
            .iter()
            .map(String::as_str)
            .filter(|name| self.admits(name))
            .collect()
    }
}
