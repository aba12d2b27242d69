//! MCP parameter types for conductor tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for the list_agents tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListAgentsParams {
    /// Only return agents whose capability tags intersect this list
    #[serde(default)]
    pub capabilities: Option<Vec<String>>,
}

/// Parameters for the list_workflows tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListWorkflowsParams {}

/// Parameters for the handoff tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HandoffParams {
    /// Agent to invoke (must be registered)
    pub target_agent: String,

    /// Agent the handoff is attributed to, if any
    #[serde(default)]
    pub source_agent: Option<String>,

    /// Opaque payload passed to the agent's backing tool
    #[serde(default)]
    pub context: Value,

    /// Optional human-readable reason for the handoff
    #[serde(default)]
    pub reason: Option<String>,
}

/// Parameters for the workflow tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowParams {
    /// Name of a catalog workflow
    pub workflow_name: String,

    /// Initial input, stored under the `_initial` outputs key
    #[serde(default)]
    pub input: Value,
}

/// Parameters for the execution_graph tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExecutionGraphParams {
    /// Output format: "mermaid" (default), "sequence", or "records"
    #[serde(default)]
    pub format: Option<String>,
}
