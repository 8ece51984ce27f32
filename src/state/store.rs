//! In-memory collection of named flows.

use tracing::debug;

use crate::error::{FlowError, Result};
use crate::runner::Flow;

/// Flows known to the current session, kept in creation order.
///
/// Names are unique. Nothing is persisted.
#[derive(Debug, Default)]
pub struct FlowStore {
    flows: Vec<Flow>,
}

impl FlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty flow named `name` and return it for editing.
    pub fn create(&mut self, name: &str) -> Result<&mut Flow> {
        self.insert(Flow::new(name))
    }

    /// Add an existing flow.
    pub fn insert(&mut self, flow: Flow) -> Result<&mut Flow> {
        if self.position(flow.name()).is_some() {
            return Err(FlowError::DuplicateFlow {
                name: flow.name().to_string(),
            });
        }
        debug!("Storing flow '{}' with {} steps", flow.name(), flow.len());
        self.flows.push(flow);
        let last = self.flows.len() - 1;
        Ok(&mut self.flows[last])
    }

    pub fn get(&self, name: &str) -> Option<&Flow> {
        self.flows.iter().find(|f| f.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Flow> {
        self.flows.iter_mut().find(|f| f.name() == name)
    }

    /// Remove and return the flow named `name`.
    pub fn remove(&mut self, name: &str) -> Result<Flow> {
        let index = self
            .position(name)
            .ok_or_else(|| FlowError::FlowNotFound {
                name: name.to_string(),
            })?;
        Ok(self.flows.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flow> {
        self.flows.iter()
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.flows.iter().position(|f| f.name() == name)
    }
}
