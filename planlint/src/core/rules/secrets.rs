//! E004: credential-like substrings in step parameters.
//!
//! Plain case-insensitive substring containment, not regex. Over-reporting is
//! acceptable.

use crate::core::rules::{LintContext, Rule};
use crate::core::types::{Issue, IssueCode};

pub struct SecretRule;

impl Rule for SecretRule {
    fn name(&self) -> &'static str {
        "secrets"
    }

    fn check(&self, ctx: &LintContext<'_>, issues: &mut Vec<Issue>) {
        let patterns: Vec<(&str, String)> = ctx
            .options
            .secret_patterns
            .iter()
            .filter(|pattern| !pattern.is_empty())
            .map(|pattern| (pattern.as_str(), pattern.to_lowercase()))
            .collect();
        if patterns.is_empty() {
            return;
        }

        for step in ctx.model.steps() {
            let blob = step.parameters_text().to_lowercase();
            for (original, folded) in &patterns {
                if blob.contains(folded.as_str()) {
                    issues.push(Issue::new(
                        IssueCode::E004,
                        format!("Potential secret '{original}' exposed in parameters"),
                        format!("{}.parameters", step.id),
                    ));
                }
            }
        }
    }
}
