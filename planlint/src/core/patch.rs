//! Mechanical application of issue fixes to a copy of the plan.
//!
//! Only unknown-tool renames are applied. Other fixes (missing-parameter
//! placeholders) stay informational.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::core::result::LintResult;
use crate::core::types::{Issue, IssueCode};
use crate::plan::default_step_id;

static SUGGESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"did you mean '([^']+)'\?").unwrap());

/// A patched copy of a plan and the number of rewrites that landed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub plan: Value,
    pub applied: usize,
}

impl LintResult {
    /// Return a patched deep copy of `plan`. The input is never mutated.
    ///
    /// Fixes that cannot be applied are skipped.
    pub fn apply_patch(&self, plan: &Value) -> Value {
        self.patch(plan).plan
    }

    /// Like [`LintResult::apply_patch`], also counting applied rewrites.
    pub fn patch(&self, plan: &Value) -> Patch {
        let mut patched = plan.clone();
        let mut applied = 0;
        for issue in self.issues() {
            if issue.fix.as_deref().is_some_and(|fix| !fix.is_empty())
                && apply_fix(&mut patched, issue)
            {
                applied += 1;
            }
        }
        Patch {
            plan: patched,
            applied,
        }
    }
}

/// Rewrite the tool named by an E001 issue. Returns whether a step changed.
fn apply_fix(plan: &mut Value, issue: &Issue) -> bool {
    if issue.code != IssueCode::E001 {
        return false;
    }
    let Some(suggested) = suggested_name(&issue.message) else {
        return false;
    };
    // Step ids may contain dots; E001 locations are always `<id>.tool`.
    let Some(target) = issue.location.strip_suffix(".tool") else {
        return false;
    };
    let Some(steps) = plan.get_mut("steps").and_then(Value::as_array_mut) else {
        return false;
    };

    let step = steps.iter_mut().enumerate().find_map(|(idx, step)| {
        let id = match step.get("id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => default_step_id(idx + 1),
        };
        (id == target).then_some(step)
    });
    let Some(Value::Object(step)) = step else {
        return false;
    };
    debug!(step = target, tool = suggested, "rewrite tool reference");
    step.insert("tool".to_string(), Value::String(suggested.to_string()));
    true
}

/// Tool name embedded in an E001 message, if any.
fn suggested_name(message: &str) -> Option<&str> {
    SUGGESTION_RE
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
