//! Workflow catalog
//!
//! A read-only map of workflow name to definition, populated at startup from
//! the built-in set and overlaid with custom TOML definitions from
//! `~/.conductor/workflows/`. The catalog performs no validation beyond
//! existence checks; step/agent compatibility is discovered at execution time
//! inside the orchestrator.

use crate::types::{CatalogError, WorkflowDefinition, WorkflowStep, WorkflowSummary};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Static catalog of workflow definitions
#[derive(Debug, Clone, Default)]
pub struct WorkflowCatalog {
    workflows: HashMap<String, WorkflowDefinition>,
}

impl WorkflowCatalog {
    /// Catalog holding only the built-in workflows
    pub fn builtin() -> Self {
        Self {
            workflows: builtin_workflows(),
        }
    }

    /// Built-in workflows overlaid with custom definitions from the default
    /// directory (`~/.conductor/workflows/`), when it exists
    pub fn load() -> Self {
        let mut catalog = Self::builtin();
        if let Some(dir) = default_workflows_dir() {
            catalog.overlay_dir(&dir);
        }
        catalog
    }

    /// Merge every parseable `*.toml` workflow from `dir` into the catalog,
    /// overwriting built-ins with the same name
    ///
    /// A missing directory is not an error; unparseable files are logged
    /// and skipped.
    pub fn overlay_dir(&mut self, dir: &Path) {
        if !dir.exists() {
            return;
        }
        match load_custom_workflows(dir) {
            Ok(custom) => self.workflows.extend(custom),
            Err(e) => {
                tracing::warn!("Failed to load custom workflows from {:?}: {}", dir, e);
            }
        }
    }

    /// Look up a workflow by name
    pub fn get_workflow(&self, name: &str) -> Option<&WorkflowDefinition> {
        self.workflows.get(name)
    }

    /// Summaries of every registered workflow, sorted by name
    pub fn list_workflows(&self) -> Vec<WorkflowSummary> {
        let mut summaries: Vec<WorkflowSummary> = self
            .workflows
            .values()
            .map(|w| WorkflowSummary {
                name: w.name.clone(),
                description: w.description.clone(),
                step_count: w.steps.len(),
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    /// Number of registered workflows
    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

/// Default custom workflows directory: `~/.conductor/workflows/`
pub fn default_workflows_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".conductor").join("workflows"))
}

/// Get all built-in workflows
///
/// - code-review-chain: score, security-check, and document code
/// - design-to-spec: turn a design brief into documentation
pub fn builtin_workflows() -> HashMap<String, WorkflowDefinition> {
    let mut workflows = HashMap::new();

    workflows.insert(
        "code-review-chain".to_string(),
        WorkflowDefinition::new("code-review-chain")
            .with_description("Score code quality, run a security check, and generate docs")
            .with_step(WorkflowStep::new("code-scorer"))
            .with_step(
                WorkflowStep::new("security-analyzer")
                    .map_path("code", "_initial.code")
                    .map_path("score_report", "code-scorer"),
            )
            .with_step(
                WorkflowStep::new("documentation-generator")
                    .map_path("score_report", "code-scorer")
                    .map_path("security_report", "security-analyzer"),
            ),
    );

    workflows.insert(
        "design-to-spec".to_string(),
        WorkflowDefinition::new("design-to-spec")
            .with_description("Draft design notes from a brief and turn them into documentation")
            .with_step(WorkflowStep::new("design-assistant"))
            .with_step(
                WorkflowStep::new("documentation-generator")
                    .map_path("design_notes", "design-assistant")
                    .map_path("requirements", "_initial"),
            ),
    );

    workflows
}

/// Load custom workflow definitions from `*.toml` files in `dir`
///
/// Files that fail to parse are logged at `warn` and skipped rather than
/// failing the whole load.
pub fn load_custom_workflows(
    dir: &Path,
) -> Result<HashMap<String, WorkflowDefinition>, CatalogError> {
    let mut workflows = HashMap::new();

    let entries = std::fs::read_dir(dir).map_err(|e| CatalogError::Io(e.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|e| CatalogError::Io(e.to_string()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }

        match WorkflowDefinition::from_toml_file(&path) {
            Ok(workflow) => {
                workflows.insert(workflow.name.clone(), workflow);
            }
            Err(e) => {
                tracing::warn!("Skipping workflow file {:?}: {}", path, e);
            }
        }
    }

    Ok(workflows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_code_review_chain() {
        let catalog = WorkflowCatalog::builtin();
        let workflow = catalog.get_workflow("code-review-chain").unwrap();

        assert_eq!(workflow.steps.len(), 3);
        assert_eq!(workflow.steps[0].agent, "code-scorer");
        assert_eq!(workflow.steps[1].agent, "security-analyzer");
        assert_eq!(workflow.steps[2].agent, "documentation-generator");

        // First step takes the initial input unchanged
        assert!(workflow.steps[0].input_mapping.is_none());
        // Later steps map prior outputs
        assert!(workflow.steps[2].input_mapping.is_some());
    }

    #[test]
    fn test_unknown_workflow_is_absent() {
        let catalog = WorkflowCatalog::builtin();
        assert!(catalog.get_workflow("does-not-exist").is_none());
    }

    #[test]
    fn test_list_workflows_sorted() {
        let catalog = WorkflowCatalog::builtin();
        let summaries = catalog.list_workflows();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "code-review-chain");
        assert_eq!(summaries[0].step_count, 3);
        assert_eq!(summaries[1].name, "design-to-spec");
    }

    #[test]
    fn test_overlay_custom_dir() {
        let dir = tempfile::tempdir().unwrap();

        let mut file = std::fs::File::create(dir.path().join("triage.toml")).unwrap();
        writeln!(
            file,
            r#"
name = "triage"
description = "Custom triage workflow"

[[steps]]
agent = "code-scorer"
"#
        )
        .unwrap();

        // A broken file is skipped, not fatal
        std::fs::write(dir.path().join("broken.toml"), "not [valid").unwrap();
        // Non-TOML files are ignored
        std::fs::write(dir.path().join("README.md"), "ignore me").unwrap();

        let mut catalog = WorkflowCatalog::builtin();
        catalog.overlay_dir(dir.path());

        assert_eq!(catalog.len(), 3);
        let triage = catalog.get_workflow("triage").unwrap();
        assert_eq!(triage.steps.len(), 1);
    }

    #[test]
    fn test_overlay_missing_dir_is_noop() {
        let mut catalog = WorkflowCatalog::builtin();
        catalog.overlay_dir(Path::new("/definitely/not/a/real/dir"));
        assert_eq!(catalog.len(), 2);
    }
}
