//! Bounded handoff record buffer and diagram renderers
//!
//! Every handoff (standalone or within a workflow) is mirrored here so the
//! recent execution history can be rendered as a Mermaid flowchart or
//! sequence diagram. The buffer is a fixed-capacity ring: once full, the
//! oldest records are evicted first.

use crate::types::{HandoffRecord, HandoffResult};
use std::collections::VecDeque;
use uuid::Uuid;

/// Default ring buffer capacity
pub const DEFAULT_MAX_RECORDS: usize = 100;

/// Pseudo-participant used for handoffs with no source agent
const USER_PARTICIPANT: &str = "User";

/// Bounded, ordered record of executed handoffs
#[derive(Debug)]
pub struct ExecutionGraph {
    records: VecDeque<HandoffRecord>,
    max_records: usize,
}

impl Default for ExecutionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionGraph {
    /// Create a graph with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_RECORDS)
    }

    /// Create a graph holding at most `max_records` entries
    pub fn with_capacity(max_records: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_records),
            max_records,
        }
    }

    /// Record a handoff outcome, assigning a generated id and timestamp
    ///
    /// Evicts the oldest record once the buffer exceeds its capacity.
    /// Returns the assigned record id.
    pub fn record_handoff(
        &mut self,
        source_agent: Option<&str>,
        target_agent: &str,
        result: &HandoffResult,
    ) -> String {
        let record = HandoffRecord {
            id: Uuid::new_v4().to_string(),
            source_agent: source_agent.map(|s| s.to_string()),
            target_agent: target_agent.to_string(),
            timestamp: chrono::Utc::now(),
            execution_time_ms: result.execution_time_ms,
            success: result.success,
            error: result.error.clone(),
        };
        let id = record.id.clone();

        self.records.push_back(record);
        while self.records.len() > self.max_records {
            self.records.pop_front();
        }

        id
    }

    /// Defensive copy of the recorded handoffs, oldest first
    pub fn get_records(&self) -> Vec<HandoffRecord> {
        self.records.iter().cloned().collect()
    }

    /// Render the history as a Mermaid flowchart
    ///
    /// One edge per record in insertion order, labeled with the elapsed
    /// time; failed handoffs tag the target node with the `error` class.
    pub fn to_mermaid(&self) -> String {
        if self.records.is_empty() {
            return "graph TD\n    empty[No handoffs recorded]".to_string();
        }

        let mut lines = vec!["graph TD".to_string()];
        let mut any_failed = false;

        for record in &self.records {
            let source = record.source_agent.as_deref().unwrap_or(USER_PARTICIPANT);
            if record.success {
                lines.push(format!(
                    "    {} -->|{}ms| {}",
                    source, record.execution_time_ms, record.target_agent
                ));
            } else {
                any_failed = true;
                lines.push(format!(
                    "    {} -->|{}ms| {}:::error",
                    source, record.execution_time_ms, record.target_agent
                ));
            }
        }

        if any_failed {
            lines.push("    classDef error stroke:#c0392b,color:#c0392b".to_string());
        }

        lines.join("\n")
    }

    /// Render the history as a Mermaid sequence diagram
    ///
    /// One message per record: `->>` for success, `-x` for failure, with
    /// `User` standing in for handoffs with no source agent.
    pub fn to_sequence_diagram(&self) -> String {
        let mut lines = vec!["sequenceDiagram".to_string()];

        for record in &self.records {
            let source = record.source_agent.as_deref().unwrap_or(USER_PARTICIPANT);
            if record.success {
                lines.push(format!(
                    "    {}->>{}: {}ms",
                    source, record.target_agent, record.execution_time_ms
                ));
            } else {
                let error = record.error.as_deref().unwrap_or("failed");
                lines.push(format!(
                    "    {}-x{}: {}",
                    source, record.target_agent, error
                ));
            }
        }

        lines.join("\n")
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok_result(ms: u64) -> HandoffResult {
        HandoffResult::ok(json!({"done": true}), ms)
    }

    #[test]
    fn test_ring_buffer_evicts_oldest_first() {
        let mut graph = ExecutionGraph::with_capacity(3);

        for i in 0..5 {
            graph.record_handoff(None, &format!("agent-{}", i), &ok_result(i));
        }

        let records = graph.get_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].target_agent, "agent-2");
        assert_eq!(records[2].target_agent, "agent-4");
    }

    #[test]
    fn test_get_records_is_a_copy() {
        let mut graph = ExecutionGraph::new();
        graph.record_handoff(None, "a", &ok_result(1));

        let mut records = graph.get_records();
        records.clear();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_mermaid_empty_placeholder() {
        let graph = ExecutionGraph::new();
        assert_eq!(graph.to_mermaid(), "graph TD\n    empty[No handoffs recorded]");
    }

    #[test]
    fn test_mermaid_edges_in_insertion_order() {
        let mut graph = ExecutionGraph::new();
        graph.record_handoff(None, "code-scorer", &ok_result(12));
        graph.record_handoff(
            Some("code-scorer"),
            "security-analyzer",
            &HandoffResult::failure("tool exploded", 30),
        );

        let rendered = graph.to_mermaid();
        let edges: Vec<&str> = rendered.lines().filter(|l| l.contains("-->")).collect();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], "    User -->|12ms| code-scorer");
        assert_eq!(
            edges[1],
            "    code-scorer -->|30ms| security-analyzer:::error"
        );
        assert!(rendered.contains("classDef error"));
    }

    #[test]
    fn test_sequence_diagram_arrows() {
        let mut graph = ExecutionGraph::new();
        graph.record_handoff(None, "code-scorer", &ok_result(12));
        graph.record_handoff(
            Some("code-scorer"),
            "security-analyzer",
            &HandoffResult::failure("tool exploded", 30),
        );

        let rendered = graph.to_sequence_diagram();
        assert!(rendered.starts_with("sequenceDiagram"));
        assert!(rendered.contains("    User->>code-scorer: 12ms"));
        assert!(rendered.contains("    code-scorer-xsecurity-analyzer: tool exploded"));
    }

    #[test]
    fn test_clear() {
        let mut graph = ExecutionGraph::new();
        graph.record_handoff(None, "a", &ok_result(1));
        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.to_mermaid().contains("No handoffs recorded"));
    }
}
