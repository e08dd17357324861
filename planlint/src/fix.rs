//! Orchestration for `planlint fix`.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::core::lint::lint;
use crate::core::result::LintResult;
use crate::io::config::LintConfig;
use crate::io::plan_store::load_plan;
use crate::io::registry_store::load_registry;
use crate::registry::ToolRegistry;

/// Outcome of one lint → patch → re-lint cycle.
#[derive(Debug, Clone)]
pub struct FixOutcome {
    pub patched: Value,
    /// Number of tool rewrites applied to `patched`.
    pub applied: usize,
    /// Issues found in the input plan (with fixes attached).
    pub before: LintResult,
    /// Issues remaining in the patched plan.
    pub after: LintResult,
}

/// Lint with fixes enabled, patch a copy, and re-lint the copy.
pub fn fix_plan_value(plan: &Value, registry: &ToolRegistry, cfg: &LintConfig) -> FixOutcome {
    let mut options = cfg.lint_options();
    options.autofix = true;

    let before = lint(plan, registry, &options);
    let patch = before.patch(plan);
    let after = lint(&patch.plan, registry, &options);
    FixOutcome {
        patched: patch.plan,
        applied: patch.applied,
        before,
        after,
    }
}

/// Load the plan and registry from disk and run [`fix_plan_value`].
pub fn fix_plan(plan_path: &Path, registry_path: &Path, cfg: &LintConfig) -> Result<FixOutcome> {
    let plan = load_plan(plan_path, &cfg.limits).context("load plan")?;
    let registry = load_registry(registry_path).context("load tool registry")?;
    let outcome = fix_plan_value(&plan, &registry, cfg);
    info!(
        plan = %plan_path.display(),
        applied = outcome.applied,
        before = outcome.before.issues().len(),
        after = outcome.after.issues().len(),
        "fix finished"
    );
    Ok(outcome)
}
