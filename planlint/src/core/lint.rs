//! Lint entry point: build the plan model, run every rule, collect issues.

use serde_json::Value;
use tracing::{debug, trace};

use crate::core::model::PlanModel;
use crate::core::result::LintResult;
use crate::core::rules::{LintContext, LintOptions, default_rules};
use crate::registry::ToolRegistry;

/// Lint `plan` against `registry`.
///
/// Never fails: a malformed container yields a single E999 issue and no
/// other rule runs. Neither input is mutated.
pub fn lint(plan: &Value, registry: &ToolRegistry, options: &LintOptions) -> LintResult {
    let model = match PlanModel::build(plan) {
        Ok(model) => model,
        Err(fatal) => {
            debug!(code = %fatal.code, "plan container rejected");
            return LintResult::new(vec![fatal]);
        }
    };

    let ctx = LintContext {
        model: &model,
        registry,
        options,
    };
    let mut issues = Vec::new();
    for rule in default_rules() {
        let before = issues.len();
        rule.check(&ctx, &mut issues);
        trace!(rule = rule.name(), found = issues.len() - before, "rule finished");
    }

    debug!(
        steps = model.steps().len(),
        issues = issues.len(),
        "lint finished"
    );
    LintResult::new(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IssueCode;
    use crate::test_support::sample_registry;
    use serde_json::json;

    #[test]
    fn empty_steps_are_clean() {
        let result = lint(&json!({"steps": []}), &sample_registry(), &LintOptions::default());
        assert!(result.is_clean());
    }

    #[test]
    fn malformed_container_short_circuits() {
        let result = lint(&json!({"other": 1}), &sample_registry(), &LintOptions::default());
        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].code, IssueCode::E999);
        assert_eq!(result.issues()[0].location, "plan");
    }

    #[test]
    fn issues_follow_rule_order() {
        let plan = json!({"steps": [
            {"id": "a", "tool": "search_web", "parameters": {"query": "sk-1"}, "outputs": ["r"]},
            {"id": "b", "tool": "search_web", "parameters": {"query": "sk-1"}, "depends_on": ["zz"]},
            {"id": "c", "tool": "nope"}
        ]});
        let options = LintOptions {
            secret_patterns: vec!["sk-".to_string()],
            autofix: false,
        };
        let result = lint(&plan, &sample_registry(), &options);
        let codes: Vec<IssueCode> = result.issues().iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                IssueCode::E001,
                IssueCode::E004,
                IssueCode::E004,
                IssueCode::E003,
                IssueCode::W001,
                IssueCode::W002,
            ]
        );
    }

    #[test]
    fn input_plan_is_untouched() {
        let plan = json!({"steps": [{"tool": "serch_web"}]});
        let before = plan.clone();
        let options = LintOptions {
            autofix: true,
            ..LintOptions::default()
        };
        let _ = lint(&plan, &sample_registry(), &options);
        assert_eq!(plan, before);
    }
}
