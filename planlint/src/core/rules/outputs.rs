//! W002: declared outputs that no step parameter references.

use crate::core::rules::{LintContext, Rule};
use crate::core::types::{Issue, IssueCode};

pub struct UnusedOutputRule;

impl Rule for UnusedOutputRule {
    fn name(&self) -> &'static str {
        "outputs"
    }

    fn check(&self, ctx: &LintContext<'_>, issues: &mut Vec<Issue>) {
        let model = ctx.model;
        if model.outputs_by_step.values().all(Vec::is_empty) {
            return;
        }

        let blob: String = model.steps().iter().map(|step| step.parameters_text()).collect();
        for id in &model.step_ids {
            for output in model.outputs_of(id) {
                if !is_referenced(&blob, id, output) {
                    issues.push(Issue::new(
                        IssueCode::W002,
                        format!("Output '{output}' is never referenced"),
                        format!("{id}.outputs"),
                    ));
                }
            }
        }
    }
}

/// True if `blob` contains `{id.out}`, `${id.out}` or `{{id.out}}`.
fn is_referenced(blob: &str, step_id: &str, output: &str) -> bool {
    let name = format!("{step_id}.{output}");
    [
        format!("{{{name}}}"),
        format!("${{{name}}}"),
        format!("{{{{{name}}}}}"),
    ]
    .iter()
    .any(|pattern| blob.contains(pattern.as_str()))
}
