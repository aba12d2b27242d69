//! Conductor MCP Server
//!
//! Agent orchestration over the MCP protocol: a registry of callable agents,
//! a handoff protocol for invoking one agent from another's output, a linear
//! multi-step workflow executor with inter-step input mapping, and a bounded
//! execution trace with diagram rendering.
//!
//! # Features
//!
//! - Register capability-tagged agents backed by externally executed tools
//! - Execute single handoffs and multi-step workflows
//! - Map prior step outputs into the next step's input (literals or dotted paths)
//! - Render handoff history as Mermaid flowcharts or sequence diagrams
//! - Load built-in and custom workflow definitions from TOML
//!
//! # Architecture
//!
//! - `types` - Core agent, handoff, and workflow type definitions
//! - `registry` - In-memory agent catalog
//! - `graph` - Bounded handoff record buffer and diagram renderers
//! - `mapping` - Input-mapping resolution against accumulated outputs
//! - `catalog` - Built-in and custom workflow definitions
//! - `executor` - Tool execution seam and the built-in executor
//! - `orchestrator` - Handoff and workflow execution engine
//! - `bootstrap` - Default agent definitions registered at startup
//! - `params` - MCP parameter types
//! - `handlers` - MCP tool handlers
//! - `server` - MCP server implementation

pub mod bootstrap;
pub mod catalog;
pub mod executor;
pub mod graph;
pub mod handlers;
pub mod mapping;
pub mod orchestrator;
pub mod params;
pub mod registry;
pub mod server;
pub mod types;

// Re-export core types for convenience
pub use orchestrator::AgentOrchestrator;
pub use registry::AgentRegistry;
pub use server::ConductorMcpServer;
pub use types::{
    AgentDefinition, HandoffRecord, HandoffRequest, HandoffResult, StepResult, WorkflowDefinition,
    WorkflowResult, WorkflowStep,
};
