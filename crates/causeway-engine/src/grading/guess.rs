//! Edge-list guesses and their normalization.

use std::collections::BTreeSet;

use tracing::trace;

use causeway_core::errors::{GradingError, GradingResult};

use super::literal::{self, Literal};
use crate::graph::Edge;

/// A guessed edge list, either as literal text or already structured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeGuess {
    Text(String),
    Pairs(Vec<Edge>),
}

impl EdgeGuess {
    /// Parse (unwrapping up to `unwrap_passes` layers of quoting), lower-case
    /// both endpoints and deduplicate.
    pub fn normalize(&self, unwrap_passes: usize) -> GradingResult<BTreeSet<Edge>> {
        let pairs = match self {
            Self::Pairs(pairs) => pairs.clone(),
            Self::Text(text) => unwrap(text, unwrap_passes)?.into_pairs()?,
        };
        Ok(pairs
            .into_iter()
            .map(|(from, to)| (from.to_lowercase(), to.to_lowercase()))
            .collect())
    }
}

/// Parse `text`, then keep re-parsing while the result is a string.
fn unwrap(text: &str, passes: usize) -> GradingResult<Literal> {
    if passes == 0 {
        return Err(GradingError::invalid("no literal passes allowed"));
    }
    let mut value = Literal::Str(text.to_string());
    for pass in 0..passes {
        let Literal::Str(inner) = &value else {
            break;
        };
        trace!(pass, "unwrapping guess literal");
        value = literal::parse(inner.trim())?;
    }
    Ok(value)
}

impl From<&str> for EdgeGuess {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for EdgeGuess {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Edge>> for EdgeGuess {
    fn from(pairs: Vec<Edge>) -> Self {
        Self::Pairs(pairs)
    }
}

impl From<Vec<(&str, &str)>> for EdgeGuess {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        pairs.as_slice().into()
    }
}

impl From<&[(&str, &str)]> for EdgeGuess {
    fn from(pairs: &[(&str, &str)]) -> Self {
        Self::Pairs(
            pairs
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for EdgeGuess {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.as_slice().into()
    }
}

impl From<&BTreeSet<Edge>> for EdgeGuess {
    fn from(edges: &BTreeSet<Edge>) -> Self {
        Self::Pairs(edges.iter().cloned().collect())
    }
}
