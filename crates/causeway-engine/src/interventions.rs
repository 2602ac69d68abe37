//! Interventions (the do-operator): per-run overrides of node values.

use std::collections::BTreeMap;

use causeway_core::errors::{SampleError, SampleResult};

use crate::samples::Samples;

/// The value a node is forced to.
#[derive(Debug, Clone, PartialEq)]
pub enum Intervention {
    /// Broadcast to every sample.
    Constant(f64),
    /// One value per sample (or a single value, which broadcasts).
    Vector(Vec<f64>),
}

impl Intervention {
    /// Expand to exactly `len` values.
    pub fn broadcast(&self, name: &str, len: usize) -> SampleResult<Samples> {
        match self {
            Self::Constant(value) => Ok(Samples::constant(*value, len)),
            Self::Vector(values) => Samples::from(values.as_slice())
                .broadcast(len)
                .ok_or_else(|| SampleError::InvalidIntervention {
                    name: name.to_string(),
                    reason: format!("{} values for a run of {len} samples", values.len()),
                }),
        }
    }
}

impl From<f64> for Intervention {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl From<i64> for Intervention {
    fn from(value: i64) -> Self {
        Self::Constant(value as f64)
    }
}

impl From<bool> for Intervention {
    fn from(value: bool) -> Self {
        Self::Constant(if value { 1.0 } else { 0.0 })
    }
}

impl From<Vec<f64>> for Intervention {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(values)
    }
}

/// Interventions requested for one run, keyed by node name.
///
/// Keys are never checked against the model here; a key matching no
/// declared node is ignored unless strict interventions are configured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interventions(BTreeMap<String, Intervention>);

impl Interventions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Intervention>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set the override for `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Intervention>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Intervention> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Intervention)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Interventions
where
    K: Into<String>,
    V: Into<Intervention>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_broadcasts_to_run_length() {
        let samples = Intervention::Constant(3.0).broadcast("X", 4).unwrap();
        assert_eq!(samples.as_slice(), &[3.0; 4]);
    }

    #[test]
    fn vector_of_wrong_length_is_rejected() {
        let err = Intervention::Vector(vec![1.0, 2.0])
            .broadcast("X", 5)
            .unwrap_err();
        assert!(matches!(err, SampleError::InvalidIntervention { ref name, .. } if name == "X"));
    }

    #[test]
    fn builder_replaces_existing_key() {
        let interventions = Interventions::new().with("X", 1.0).with("X", 2.0);
        assert_eq!(interventions.len(), 1);
        assert_eq!(interventions.get("X"), Some(&Intervention::Constant(2.0)));
    }
}
