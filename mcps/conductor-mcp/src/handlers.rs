//! Handler implementations for conductor tools
//!
//! Each handler converts MCP params to engine types, calls the engine, and
//! converts results to CallToolResult. Orchestration failures stay inside the
//! returned result payloads; only caller-side mistakes (unknown workflow,
//! bad parameters) become MCP errors.

use mcp_common::{internal_error, invalid_params, json_success, text_success, CallToolResult, McpError};
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::catalog::WorkflowCatalog;
use crate::graph::ExecutionGraph;
use crate::orchestrator::AgentOrchestrator;
use crate::params::*;
use crate::registry::AgentRegistry;
use crate::types::{AgentSummary, HandoffRequest};

pub async fn list_agents(
    registry: &Arc<Mutex<AgentRegistry>>,
    params: ListAgentsParams,
) -> Result<CallToolResult, McpError> {
    let registry = registry
        .lock()
        .map_err(|_| internal_error("Agent registry lock poisoned"))?;

    let agents: Vec<AgentSummary> = match &params.capabilities {
        Some(capabilities) if !capabilities.is_empty() => registry
            .query_by_capability(capabilities)
            .into_iter()
            .map(AgentSummary::from)
            .collect(),
        _ => registry.list(),
    };

    json_success(&json!({
        "agents": agents,
        "total": agents.len(),
    }))
}

pub async fn list_workflows(
    catalog: &WorkflowCatalog,
    _params: ListWorkflowsParams,
) -> Result<CallToolResult, McpError> {
    let workflows = catalog.list_workflows();

    json_success(&json!({
        "workflows": workflows,
        "total": workflows.len(),
    }))
}

pub async fn handoff(
    orchestrator: &AgentOrchestrator,
    params: HandoffParams,
) -> Result<CallToolResult, McpError> {
    if params.target_agent.is_empty() {
        return Err(invalid_params("target_agent cannot be empty"));
    }

    let mut request = HandoffRequest::new(params.target_agent, params.context);
    request.source_agent = params.source_agent;
    request.reason = params.reason;

    // Handoff failures are data in the result, not MCP errors
    let result = orchestrator.execute_handoff(request).await;
    json_success(&result)
}

pub async fn workflow(
    orchestrator: &AgentOrchestrator,
    catalog: &WorkflowCatalog,
    params: WorkflowParams,
) -> Result<CallToolResult, McpError> {
    let definition = catalog
        .get_workflow(&params.workflow_name)
        .ok_or_else(|| invalid_params(format!("Workflow not found: {}", params.workflow_name)))?
        .clone();

    let result = orchestrator.execute_workflow(&definition, params.input).await;
    json_success(&result)
}

pub async fn execution_graph(
    graph: &Arc<Mutex<ExecutionGraph>>,
    params: ExecutionGraphParams,
) -> Result<CallToolResult, McpError> {
    let graph = graph
        .lock()
        .map_err(|_| internal_error("Execution graph lock poisoned"))?;

    match params.format.as_deref().unwrap_or("mermaid") {
        "mermaid" => Ok(text_success(graph.to_mermaid())),
        "sequence" => Ok(text_success(graph.to_sequence_diagram())),
        "records" => json_success(&graph.get_records()),
        other => Err(invalid_params(format!(
            "Unknown format '{}': expected mermaid, sequence, or records",
            other
        ))),
    }
}
