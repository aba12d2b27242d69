//! Handoff and workflow execution engine
//!
//! The orchestrator resolves agents through the registry, invokes the
//! injected tool executor, and mirrors every invocation into the execution
//! graph. Handoff failures are data, never errors: callers branch on
//! `HandoffResult::success`.
//!
//! Workflows are strict linear pipelines: steps run in declared order, each
//! awaited before the next, and the first failure stops the remaining steps.
//! There are no retries, timeouts, or parallel branches.

use crate::executor::ToolExecutor;
use crate::graph::ExecutionGraph;
use crate::mapping::resolve_input_mapping;
use crate::registry::AgentRegistry;
use crate::types::{
    HandoffRequest, HandoffResult, StepResult, WorkflowDefinition, WorkflowResult,
    INITIAL_INPUT_KEY,
};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Executes handoffs and workflows against a shared registry and graph
#[derive(Clone)]
pub struct AgentOrchestrator {
    registry: Arc<Mutex<AgentRegistry>>,
    graph: Arc<Mutex<ExecutionGraph>>,
    executor: Arc<dyn ToolExecutor>,
}

impl AgentOrchestrator {
    /// Create an orchestrator over the given registry, graph, and executor
    pub fn new(
        registry: Arc<Mutex<AgentRegistry>>,
        graph: Arc<Mutex<ExecutionGraph>>,
        executor: Arc<dyn ToolExecutor>,
    ) -> Self {
        Self {
            registry,
            graph,
            executor,
        }
    }

    /// Execute a single handoff
    ///
    /// Never returns an error: unknown agents and executor failures are
    /// captured in the result. Timing is measured even for lookup failures.
    /// Every invocation is mirrored into the execution graph; recording
    /// problems are logged and swallowed so they cannot abort the handoff.
    pub async fn execute_handoff(&self, request: HandoffRequest) -> HandoffResult {
        let started = Instant::now();
        tracing::debug!(target_agent = %request.target_agent, "Executing handoff");

        // Resolve and clone the agent so no lock is held across the await
        let agent = match self.registry.lock() {
            Ok(registry) => registry.get(&request.target_agent).cloned(),
            Err(e) => {
                tracing::warn!("Agent registry lock poisoned: {}", e);
                let result = HandoffResult::failure(
                    "Agent registry unavailable",
                    elapsed_ms(started),
                );
                self.record(&request, &result);
                return result;
            }
        };

        let result = match agent {
            None => HandoffResult::failure(
                format!("Agent not found: {}", request.target_agent),
                elapsed_ms(started),
            ),
            Some(agent) => {
                match self
                    .executor
                    .execute(&agent.tool_name, request.context.clone())
                    .await
                {
                    Ok(output) => HandoffResult::ok(output, elapsed_ms(started)),
                    Err(e) => HandoffResult::failure(e.to_string(), elapsed_ms(started)),
                }
            }
        };

        if !result.success {
            tracing::debug!(
                target_agent = %request.target_agent,
                error = result.error.as_deref().unwrap_or(""),
                "Handoff failed"
            );
        }

        self.record(&request, &result);
        result
    }

    /// Execute a workflow against an initial input
    ///
    /// Seeds `outputs` with the reserved `_initial` key, then runs each step
    /// in order: the effective input is the step's input mapping applied to
    /// `outputs` when present, otherwise the previous step's output
    /// unchanged. The first failing step stops the workflow; partial
    /// `outputs` and `steps` are still returned for diagnostics.
    ///
    /// A step whose agent name matches an earlier step overwrites that
    /// step's `outputs` entry.
    pub async fn execute_workflow(
        &self,
        workflow: &WorkflowDefinition,
        initial_input: Value,
    ) -> WorkflowResult {
        let started = Instant::now();
        tracing::debug!(workflow = %workflow.name, steps = workflow.steps.len(), "Executing workflow");

        let mut outputs = Map::new();
        outputs.insert(INITIAL_INPUT_KEY.to_string(), initial_input.clone());

        let mut current_input = initial_input;
        let mut steps: Vec<StepResult> = Vec::new();

        for step in &workflow.steps {
            let effective_input = match &step.input_mapping {
                Some(mapping) => resolve_input_mapping(mapping, &outputs),
                None => current_input.clone(),
            };

            let result = self
                .execute_handoff(HandoffRequest::new(&step.agent, effective_input))
                .await;
            steps.push(StepResult::from_handoff(&step.agent, &result));

            if !result.success {
                return WorkflowResult {
                    success: false,
                    outputs,
                    steps,
                    execution_time_ms: elapsed_ms(started),
                    error: Some(format!("Workflow failed at step: {}", step.agent)),
                };
            }

            outputs.insert(step.agent.clone(), result.output.clone());
            current_input = result.output;
        }

        WorkflowResult {
            success: true,
            outputs,
            steps,
            execution_time_ms: elapsed_ms(started),
            error: None,
        }
    }

    /// Mirror a handoff outcome into the execution graph, best-effort
    fn record(&self, request: &HandoffRequest, result: &HandoffResult) {
        match self.graph.lock() {
            Ok(mut graph) => {
                graph.record_handoff(
                    request.source_agent.as_deref(),
                    &request.target_agent,
                    result,
                );
            }
            Err(e) => {
                tracing::warn!("Skipping handoff record, execution graph lock poisoned: {}", e);
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
