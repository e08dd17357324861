//! Rule engine: ordered, independent checks over a [`PlanModel`].
//!
//! Each rule reads the model and appends zero or more issues. Rules never
//! see each other's output, so their order only affects issue order.

pub mod dependencies;
pub mod duplicates;
pub mod outputs;
pub mod secrets;
pub mod tools;

use crate::core::model::PlanModel;
use crate::core::types::Issue;
use crate::registry::ToolRegistry;

/// Caller-supplied knobs for one lint call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Case-insensitive substrings that must not appear in parameters.
    pub secret_patterns: Vec<String>,
    /// Populate `fix` on issues that have a suggested rewrite.
    pub autofix: bool,
}

/// Everything a rule may read.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    pub model: &'a PlanModel,
    pub registry: &'a ToolRegistry,
    pub options: &'a LintOptions,
}

pub trait Rule {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    fn check(&self, ctx: &LintContext<'_>, issues: &mut Vec<Issue>);
}

/// Built-in rules in execution order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(tools::ToolRule),
        Box::new(secrets::SecretRule),
        Box::new(dependencies::DependencyRule),
        Box::new(duplicates::DuplicateRule),
        Box::new(outputs::UnusedOutputRule),
    ]
}
