//! Conductor MCP Server
//!
//! This MCP server provides agent orchestration capabilities:
//! - Register and query capability-tagged agents
//! - Execute single agent handoffs
//! - Execute multi-step workflows with inter-step input mapping
//! - Render the handoff history as Mermaid diagrams

use conductor_mcp::server::ConductorMcpServer;

mcp_common::serve_stdio!(ConductorMcpServer, "conductor_mcp");
