//! Node store: write-once values and the current node order for one run.

use std::collections::HashMap;

use causeway_core::errors::{ModelError, ModelResult};

use crate::samples::Samples;

#[derive(Debug, Default)]
pub struct NodeStore {
    values: HashMap<String, Samples>,
    order: Vec<String>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> ModelResult<&Samples> {
        self.values
            .get(name)
            .ok_or_else(|| ModelError::UnknownVariable {
                name: name.to_string(),
            })
    }

    /// Store a new node and append it to the order. Existing nodes are never
    /// overwritten.
    pub fn insert(&mut self, name: &str, values: Samples) -> ModelResult<()> {
        if self.values.contains_key(name) {
            return Err(ModelError::DuplicateVariable {
                name: name.to_string(),
            });
        }
        self.values.insert(name.to_string(), values);
        self.order.push(name.to_string());
        Ok(())
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Replace the order. Callers validate the permutation first.
    pub(crate) fn reorder(&mut self, order: Vec<String>) {
        self.order = order;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, HashMap<String, Samples>) {
        (self.order, self.values)
    }
}
