//! Core agent, handoff, and workflow type definitions
//!
//! This module contains all the type definitions for agents, handoffs,
//! workflows, execution results, and errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Reserved key in a workflow's `outputs` map holding the original input.
pub const INITIAL_INPUT_KEY: &str = "_initial";

/// A registered agent: a named, capability-tagged wrapper around an
/// externally executed tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Unique agent name (registry key)
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Free-form capability tags used for match-any queries
    #[serde(default)]
    pub capabilities: BTreeSet<String>,

    /// Opaque input schema descriptor (not interpreted by the engine)
    #[serde(default)]
    pub input_schema: Value,

    /// Opaque output schema descriptor (not interpreted by the engine)
    #[serde(default)]
    pub output_schema: Value,

    /// Name of the backing tool passed to the tool executor
    pub tool_name: String,
}

impl AgentDefinition {
    /// Create a new agent definition backed by the given tool
    pub fn new(name: impl Into<String>, tool_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            capabilities: BTreeSet::new(),
            input_schema: Value::Null,
            output_schema: Value::Null,
            tool_name: tool_name.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Add a capability tag
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    /// Set the opaque input/output schema descriptors
    pub fn with_schemas(mut self, input: Value, output: Value) -> Self {
        self.input_schema = input;
        self.output_schema = output;
        self
    }
}

/// Read-only projection of a registered agent, hiding schema internals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub name: String,
    pub description: String,
    pub capabilities: BTreeSet<String>,
    pub available: bool,
}

impl From<&AgentDefinition> for AgentSummary {
    fn from(agent: &AgentDefinition) -> Self {
        Self {
            name: agent.name.clone(),
            description: agent.description.clone(),
            capabilities: agent.capabilities.clone(),
            available: true,
        }
    }
}

/// A single agent invocation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffRequest {
    /// Agent this handoff is attributed to, if any
    #[serde(default)]
    pub source_agent: Option<String>,

    /// Agent to invoke (must resolve in the registry)
    pub target_agent: String,

    /// Opaque payload passed to the backing tool
    #[serde(default)]
    pub context: Value,

    /// Optional human-readable reason for the handoff
    #[serde(default)]
    pub reason: Option<String>,
}

impl HandoffRequest {
    /// Create a handoff request for the given target agent
    pub fn new(target_agent: impl Into<String>, context: Value) -> Self {
        Self {
            source_agent: None,
            target_agent: target_agent.into(),
            context,
            reason: None,
        }
    }

    /// Attribute the handoff to a source agent
    pub fn from_agent(mut self, source: impl Into<String>) -> Self {
        self.source_agent = Some(source.into());
        self
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Outcome of a single handoff
///
/// Always returned as data; the orchestrator never surfaces handoff
/// failures as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffResult {
    /// Whether the backing tool ran successfully
    pub success: bool,

    /// Tool output on success, `null` on failure
    pub output: Value,

    /// Wall-clock duration, measured even for lookup failures
    pub execution_time_ms: u64,

    /// Failure description when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HandoffResult {
    /// Create a successful result
    pub fn ok(output: Value, execution_time_ms: u64) -> Self {
        Self {
            success: true,
            output,
            execution_time_ms,
            error: None,
        }
    }

    /// Create a failed result carrying an error description
    pub fn failure(error: impl Into<String>, execution_time_ms: u64) -> Self {
        Self {
            success: false,
            output: Value::Null,
            execution_time_ms,
            error: Some(error.into()),
        }
    }
}

/// One entry of a step's input mapping
///
/// A plain string is always a dotted path resolved against the accumulated
/// `outputs` map; a string meant literally must use the `{value: ...}`
/// wrapper form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappingValue {
    /// Use the wrapped value as-is
    Literal { value: Value },

    /// Dotted path resolved against `outputs`; the first segment is
    /// `_initial` or a prior step's agent name
    Path(String),
}

/// A step in a workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Name of the agent to run (must exist in the registry at execution time)
    pub agent: String,

    /// Optional mapping of target input field -> literal or dotted path.
    /// When absent, the step receives the previous step's output unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mapping: Option<BTreeMap<String, MappingValue>>,
}

impl WorkflowStep {
    /// Create a step invoking the given agent with no input mapping
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            input_mapping: None,
        }
    }

    /// Map an input field from a dotted path into the accumulated outputs
    pub fn map_path(mut self, field: impl Into<String>, path: impl Into<String>) -> Self {
        self.input_mapping
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), MappingValue::Path(path.into()));
        self
    }

    /// Map an input field to a literal value
    pub fn map_value(mut self, field: impl Into<String>, value: Value) -> Self {
        self.input_mapping
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), MappingValue::Literal { value });
        self
    }
}

/// A workflow definition: a named, ordered sequence of steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    /// Unique identifier for this workflow
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Workflow steps, executed strictly in order
    pub steps: Vec<WorkflowStep>,
}

impl WorkflowDefinition {
    /// Create a new workflow
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            steps: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Add a step
    pub fn with_step(mut self, step: WorkflowStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Load a workflow definition from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Load a workflow definition from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        toml::from_str(toml_str).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

/// Summary of a catalog workflow for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub name: String,
    pub description: String,
    pub step_count: usize,
}

/// Result of one attempted workflow step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Agent the step invoked
    pub agent: String,

    /// Whether the handoff succeeded
    pub success: bool,

    /// Handoff output, `null` on failure
    pub output: Value,

    /// Duration of the handoff
    pub execution_time_ms: u64,

    /// Failure description when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepResult {
    /// Build a step result from a handoff outcome
    pub fn from_handoff(agent: impl Into<String>, result: &HandoffResult) -> Self {
        Self {
            agent: agent.into(),
            success: result.success,
            output: result.output.clone(),
            execution_time_ms: result.execution_time_ms,
            error: result.error.clone(),
        }
    }
}

/// Result of executing a complete workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowResult {
    /// Whether every step completed successfully
    pub success: bool,

    /// Accumulated outputs: `_initial` plus one entry per completed step,
    /// keyed by agent name
    pub outputs: Map<String, Value>,

    /// Per-step results in execution order, including the failing step
    pub steps: Vec<StepResult>,

    /// Total wall-clock duration of the workflow
    pub execution_time_ms: u64,

    /// Set when the workflow stopped at a failing step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One recorded handoff in the execution graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffRecord {
    /// Generated record id
    pub id: String,

    /// Source agent, absent for caller-initiated handoffs
    pub source_agent: Option<String>,

    /// Target agent (recorded even when the lookup failed)
    pub target_agent: String,

    /// When the handoff was recorded
    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// Duration of the handoff
    pub execution_time_ms: u64,

    /// Whether the handoff succeeded
    pub success: bool,

    /// Failure description when `success` is false
    pub error: Option<String>,
}

/// Registry-related errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Agent already registered: {0}")]
    AlreadyRegistered(String),
}

/// Workflow-catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Workflow not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_definition_builder() {
        let agent = AgentDefinition::new("code-scorer", "score_code")
            .with_description("Scores code quality")
            .with_capability("code-analysis")
            .with_capability("quality")
            .with_schemas(json!({"type": "object"}), json!({"type": "object"}));

        assert_eq!(agent.name, "code-scorer");
        assert_eq!(agent.tool_name, "score_code");
        assert_eq!(agent.capabilities.len(), 2);
        assert!(agent.capabilities.contains("quality"));
    }

    #[test]
    fn test_workflow_builder() {
        let workflow = WorkflowDefinition::new("code-review-chain")
            .with_description("Score, security-check, and document code")
            .with_step(WorkflowStep::new("code-scorer"))
            .with_step(
                WorkflowStep::new("security-analyzer")
                    .map_path("code_context", "_initial.code_context"),
            );

        assert_eq!(workflow.name, "code-review-chain");
        assert_eq!(workflow.steps.len(), 2);
        let mapping = workflow.steps[1].input_mapping.as_ref().unwrap();
        assert_eq!(
            mapping.get("code_context"),
            Some(&MappingValue::Path("_initial.code_context".to_string()))
        );
    }

    #[test]
    fn test_workflow_from_toml() {
        let toml = r#"
            name = "review"
            description = "Review chain"

            [[steps]]
            agent = "code-scorer"

            [[steps]]
            agent = "security-analyzer"
            input_mapping = { code = "_initial.code", strict = { value = true } }
        "#;

        let workflow = WorkflowDefinition::from_toml(toml).unwrap();
        assert_eq!(workflow.name, "review");
        assert_eq!(workflow.steps.len(), 2);

        let mapping = workflow.steps[1].input_mapping.as_ref().unwrap();
        assert_eq!(
            mapping.get("code"),
            Some(&MappingValue::Path("_initial.code".to_string()))
        );
        assert_eq!(
            mapping.get("strict"),
            Some(&MappingValue::Literal { value: json!(true) })
        );
    }

    #[test]
    fn test_mapping_value_forms_from_json() {
        // Plain string is a path, the wrapper form is a literal
        let path: MappingValue = serde_json::from_value(json!("a.b.c")).unwrap();
        assert_eq!(path, MappingValue::Path("a.b.c".to_string()));

        let literal: MappingValue = serde_json::from_value(json!({"value": "a.b.c"})).unwrap();
        assert_eq!(
            literal,
            MappingValue::Literal {
                value: json!("a.b.c")
            }
        );
    }

    #[test]
    fn test_handoff_result_constructors() {
        let ok = HandoffResult::ok(json!({"score": 80}), 12);
        assert!(ok.success);
        assert!(ok.error.is_none());

        let failed = HandoffResult::failure("Agent not found: ghost", 3);
        assert!(!failed.success);
        assert_eq!(failed.output, Value::Null);
        assert_eq!(failed.error.as_deref(), Some("Agent not found: ghost"));
    }
}
