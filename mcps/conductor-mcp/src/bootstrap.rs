//! Default agent definitions registered at startup
//!
//! Maps each built-in content-generation capability to an agent definition
//! whose `tool_name` is understood by the built-in executor.

use crate::registry::AgentRegistry;
use crate::types::AgentDefinition;
use serde_json::json;

/// The default agent catalog
pub fn default_agents() -> Vec<AgentDefinition> {
    vec![
        AgentDefinition::new("code-scorer", "score_code")
            .with_description("Scores code quality with shallow hygiene heuristics")
            .with_capability("code-analysis")
            .with_capability("quality")
            .with_schemas(
                json!({
                    "type": "object",
                    "properties": {
                        "code": { "type": "string", "description": "Source code to score" }
                    }
                }),
                json!({
                    "type": "object",
                    "properties": {
                        "score": { "type": "integer" },
                        "findings": { "type": "array", "items": { "type": "string" } }
                    }
                }),
            ),
        AgentDefinition::new("security-analyzer", "generate_security_report")
            .with_description("Produces a security review checklist for code")
            .with_capability("code-analysis")
            .with_capability("security")
            .with_schemas(
                json!({
                    "type": "object",
                    "properties": {
                        "code": { "type": "string" },
                        "score_report": { "type": "object" }
                    }
                }),
                json!({
                    "type": "object",
                    "properties": {
                        "risk": { "type": "string" },
                        "checklist": { "type": "array", "items": { "type": "string" } }
                    }
                }),
            ),
        AgentDefinition::new("documentation-generator", "generate_docs")
            .with_description("Generates markdown documentation from upstream reports")
            .with_capability("documentation")
            .with_capability("content-generation")
            .with_schemas(
                json!({
                    "type": "object",
                    "properties": {
                        "score_report": { "type": "object" },
                        "security_report": { "type": "object" },
                        "design_notes": { "type": "object" }
                    }
                }),
                json!({
                    "type": "object",
                    "properties": {
                        "markdown": { "type": "string" },
                        "sections": { "type": "integer" }
                    }
                }),
            ),
        AgentDefinition::new("design-assistant", "generate_design_notes")
            .with_description("Drafts design notes from a feature brief")
            .with_capability("design")
            .with_capability("content-generation")
            .with_schemas(
                json!({
                    "type": "object",
                    "properties": {
                        "brief": { "type": "string" }
                    }
                }),
                json!({
                    "type": "object",
                    "properties": {
                        "notes": { "type": "string" }
                    }
                }),
            ),
    ]
}

/// Register the default agents, logging (not failing) on duplicates
pub fn register_default_agents(registry: &mut AgentRegistry) {
    for agent in default_agents() {
        let name = agent.name.clone();
        if let Err(e) = registry.register(agent) {
            tracing::warn!("Skipping default agent {}: {}", name, e);
        }
    }
}
