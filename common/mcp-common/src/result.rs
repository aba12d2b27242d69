//! Result helpers for MCP tool responses
//!
//! Convenience functions for building `CallToolResult` values, so tool
//! implementations don't repeat the serialize-then-wrap dance.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Create a successful JSON response from any serializable data
///
/// Serializes `data` as pretty-printed JSON and wraps it in a single text
/// content item. Returns an internal error if serialization fails.
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Create a successful plain text response
///
/// For tools that return rendered text (diagrams, templates) rather than
/// structured data.
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
