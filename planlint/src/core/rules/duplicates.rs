//! W001: steps that repeat an earlier tool call verbatim.

use std::collections::HashMap;

use crate::core::rules::{LintContext, Rule};
use crate::core::types::{Issue, IssueCode};
use crate::plan::Step;

pub struct DuplicateRule;

impl Rule for DuplicateRule {
    fn name(&self) -> &'static str {
        "duplicates"
    }

    fn check(&self, ctx: &LintContext<'_>, issues: &mut Vec<Issue>) {
        let mut first_seen: HashMap<String, &str> = HashMap::new();
        for step in ctx.model.steps() {
            let sig = signature(step);
            if let Some(first) = first_seen.get(&sig) {
                issues.push(Issue::new(
                    IssueCode::W001,
                    format!(
                        "Duplicate call to '{}' with same parameters (see {})",
                        step.tool, first
                    ),
                    step.id.clone(),
                ));
            } else {
                first_seen.insert(sig, step.id.as_str());
            }
        }
    }
}

/// Tool name plus key-sorted parameter JSON.
///
/// `serde_json::Map` keeps keys ordered, so nested mappings are canonical too.
fn signature(step: &Step) -> String {
    format!("{}:{}", step.tool, step.parameters_text())
}
