//! E001 unknown tools and E002 parameter checks.

use crate::core::fuzzy::{DEFAULT_THRESHOLD, best_match};
use crate::core::rules::{LintContext, Rule};
use crate::core::types::{Issue, IssueCode};
use crate::plan::Step;
use crate::registry::ToolSpec;

pub struct ToolRule;

impl Rule for ToolRule {
    fn name(&self) -> &'static str {
        "tools"
    }

    fn check(&self, ctx: &LintContext<'_>, issues: &mut Vec<Issue>) {
        for step in ctx.model.steps() {
            match ctx.registry.get(&step.tool) {
                Some(spec) => check_parameters(step, spec, ctx.options.autofix, issues),
                None => {
                    let suggestion = best_match(&step.tool, ctx.registry.names(), DEFAULT_THRESHOLD);
                    let message = format!("Tool '{}' not found{}", step.tool, hint(suggestion));
                    let fix = suggestion
                        .filter(|_| ctx.options.autofix)
                        .map(str::to_string);
                    issues.push(
                        Issue::new(IssueCode::E001, message, format!("{}.tool", step.id))
                            .with_fix(fix),
                    );
                }
            }
        }
    }
}

fn check_parameters(step: &Step, spec: &ToolSpec, autofix: bool, issues: &mut Vec<Issue>) {
    for name in step.parameters.keys() {
        if spec.parameters.contains_key(name) {
            continue;
        }
        let suggestion = best_match(
            name,
            spec.parameters.keys().map(String::as_str),
            DEFAULT_THRESHOLD,
        );
        issues.push(Issue::new(
            IssueCode::E002,
            format!(
                "Parameter '{}' not valid for tool '{}'{}",
                name,
                step.tool,
                hint(suggestion)
            ),
            format!("{}.parameters.{}", step.id, name),
        ));
    }

    for name in spec.required_parameters() {
        if step.parameters.contains_key(name) {
            continue;
        }
        let fix = autofix.then(|| format!("{{REQUIRED: {name}}}"));
        issues.push(
            Issue::new(
                IssueCode::E002,
                format!("Missing required parameter '{name}'"),
                format!("{}.parameters", step.id),
            )
            .with_fix(fix),
        );
    }
}

fn hint(suggestion: Option<&str>) -> String {
    suggestion
        .map(|name| format!(" (did you mean '{name}'?)"))
        .unwrap_or_default()
}
