//! Orchestration for `planlint check`.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::Value;
use tracing::info;

use crate::core::lint::lint;
use crate::core::result::LintResult;
use crate::exit_codes;
use crate::io::config::LintConfig;
use crate::io::plan_store::load_plan;
use crate::io::registry_store::load_registry;

/// How lint results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per issue plus a summary.
    #[default]
    Text,
    /// Issues and counts as JSON.
    Json,
    /// SARIF 2.1.0 log for CI code-scanning upload.
    Sarif,
}

/// Result of linting one plan file.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// The plan document as loaded (never modified).
    pub plan: Value,
    pub result: LintResult,
    pub deny_warnings: bool,
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        exit_code_for(&self.result, self.deny_warnings)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        render_result(&self.result, format)
    }
}

/// Load plan + registry from disk and lint with `cfg`.
pub fn check_plan(plan_path: &Path, registry_path: &Path, cfg: &LintConfig) -> Result<CheckOutcome> {
    let registry = load_registry(registry_path).context("load tool registry")?;
    let plan = load_plan(plan_path, &cfg.limits).context("load plan")?;
    let result = lint(&plan, &registry, &cfg.lint_options());
    info!(
        plan = %plan_path.display(),
        errors = result.error_count(),
        warnings = result.warning_count(),
        "check finished"
    );
    Ok(CheckOutcome {
        plan,
        result,
        deny_warnings: cfg.deny_warnings,
    })
}

/// Exit code for a lint result under the warning policy.
pub fn exit_code_for(result: &LintResult, deny_warnings: bool) -> i32 {
    if result.has_errors() || (deny_warnings && result.has_warnings()) {
        exit_codes::LINT_FAILED
    } else {
        exit_codes::OK
    }
}

/// Render `result` in `format`. JSON output ends with a newline; text does not.
pub fn render_result(result: &LintResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.to_string()),
        OutputFormat::Json => pretty(result).context("serialize lint result"),
        OutputFormat::Sarif => pretty(&result.to_sarif()).context("serialize sarif log"),
    }
}

fn pretty<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = serde_json::to_string_pretty(value)?;
    buf.push('\n');
    Ok(buf)
}
