//! In-memory agent catalog
//!
//! Maps agent names to definitions. Registration order is preserved so
//! capability queries and listings are deterministic.

use crate::types::{AgentDefinition, AgentSummary, RegistryError};

/// In-memory catalog of registered agents
///
/// Backed by a `Vec` scanned by name; agent catalogs are small and the
/// registry must preserve registration order for queries and listings.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    agents: Vec<AgentDefinition>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { agents: Vec::new() }
    }

    /// Register an agent definition
    ///
    /// Fails if an agent with the same name is already registered; the
    /// existing registration is left unchanged.
    pub fn register(&mut self, agent: AgentDefinition) -> Result<(), RegistryError> {
        if self.agents.iter().any(|a| a.name == agent.name) {
            return Err(RegistryError::AlreadyRegistered(agent.name));
        }
        self.agents.push(agent);
        Ok(())
    }

    /// Look up an agent by name
    pub fn get(&self, name: &str) -> Option<&AgentDefinition> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Return every agent whose capability set intersects the given list
    /// (match-any), in registration order
    pub fn query_by_capability(&self, capabilities: &[String]) -> Vec<&AgentDefinition> {
        self.agents
            .iter()
            .filter(|a| capabilities.iter().any(|c| a.capabilities.contains(c)))
            .collect()
    }

    /// Read-only projection of all registered agents, hiding schema internals
    pub fn list(&self) -> Vec<AgentSummary> {
        self.agents.iter().map(AgentSummary::from).collect()
    }

    /// Remove an agent by name; returns whether an entry was removed
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.agents.len();
        self.agents.retain(|a| a.name != name);
        self.agents.len() < before
    }

    /// Empty the catalog
    pub fn clear(&mut self) {
        self.agents.clear();
    }

    /// Number of registered agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
