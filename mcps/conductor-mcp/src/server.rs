//! Conductor MCP Server implementation

use crate::bootstrap;
use crate::catalog::WorkflowCatalog;
use crate::executor::{BuiltinToolExecutor, ToolExecutor};
use crate::graph::ExecutionGraph;
use crate::handlers;
use crate::orchestrator::AgentOrchestrator;
use crate::params::*;
use crate::registry::AgentRegistry;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::{Arc, Mutex};

/// The main Conductor MCP Server
///
/// Owns the registry, execution graph, workflow catalog, and orchestrator
/// explicitly; there are no process-wide singletons, so multiple isolated
/// server instances can coexist (one per test, for example).
#[derive(Clone)]
pub struct ConductorMcpServer {
    /// MCP tool router
    tool_router: ToolRouter<Self>,

    /// Shared agent registry
    pub registry: Arc<Mutex<AgentRegistry>>,

    /// Shared handoff trace
    pub graph: Arc<Mutex<ExecutionGraph>>,

    /// Static workflow catalog (built-ins plus custom TOML definitions)
    pub catalog: WorkflowCatalog,

    /// Handoff and workflow execution engine
    pub orchestrator: AgentOrchestrator,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl ConductorMcpServer {
    /// Create a server backed by the built-in tool executor
    pub fn new() -> Self {
        Self::with_executor(Arc::new(BuiltinToolExecutor::new()))
    }

    /// Create a server with an injected tool executor
    ///
    /// Registers the default agent catalog and loads built-in plus custom
    /// workflows (`~/.conductor/workflows/`).
    pub fn with_executor(executor: Arc<dyn ToolExecutor>) -> Self {
        let mut registry = AgentRegistry::new();
        bootstrap::register_default_agents(&mut registry);

        let registry = Arc::new(Mutex::new(registry));
        let graph = Arc::new(Mutex::new(ExecutionGraph::new()));
        let orchestrator = AgentOrchestrator::new(registry.clone(), graph.clone(), executor);

        Self {
            tool_router: Self::tool_router(),
            registry,
            graph,
            catalog: WorkflowCatalog::load(),
            orchestrator,
        }
    }

    // ========================================================================
    // MCP Tool Handlers
    // ========================================================================

    #[tool(description = "List registered agents with their capability tags; \
                          optionally filter by capabilities (match-any)")]
    async fn list_agents(
        &self,
        Parameters(params): Parameters<ListAgentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_agents(&self.registry, params).await
    }

    #[tool(description = "List catalog workflows with descriptions and step counts")]
    async fn list_workflows(
        &self,
        Parameters(params): Parameters<ListWorkflowsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_workflows(&self.catalog, params).await
    }

    #[tool(description = "Execute a single agent handoff; failures are returned \
                          in the result, never thrown")]
    async fn handoff(
        &self,
        Parameters(params): Parameters<HandoffParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::handoff(&self.orchestrator, params).await
    }

    #[tool(description = "Execute a catalog workflow against an initial input; \
                          stops at the first failing step")]
    async fn workflow(
        &self,
        Parameters(params): Parameters<WorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::workflow(&self.orchestrator, &self.catalog, params).await
    }

    #[tool(description = "Render the recent handoff history as a Mermaid flowchart, \
                          sequence diagram, or raw records")]
    async fn execution_graph(
        &self,
        Parameters(params): Parameters<ExecutionGraphParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::execution_graph(&self.graph, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for ConductorMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Agent orchestration MCP server. Register capability-tagged agents, \
                 execute single handoffs or multi-step workflows with inter-step \
                 input mapping, and render the handoff history as Mermaid diagrams."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for ConductorMcpServer {
    fn default() -> Self {
        Self::new()
    }
}
