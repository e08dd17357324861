//! Indexed, read-only view over a parsed plan.

use std::collections::HashMap;

use serde_json::Value;

use crate::core::types::{Issue, IssueCode};
use crate::plan::{Plan, Step};

/// Plan plus the per-step indices rules consume.
///
/// When step ids repeat, the indices keep the last-seen value per id and
/// `step_ids` lists each id once, in first-seen order.
#[derive(Debug, Clone)]
pub struct PlanModel {
    pub plan: Plan,
    pub step_ids: Vec<String>,
    pub outputs_by_step: HashMap<String, Vec<String>>,
    pub depends_by_step: HashMap<String, Vec<String>>,
}

impl PlanModel {
    /// Build the model, or the single fatal issue for a malformed container.
    pub fn build(raw: &Value) -> Result<Self, Issue> {
        let plan = Plan::from_value(raw).ok_or_else(|| {
            Issue::new(
                IssueCode::E999,
                "Invalid plan format: missing 'steps' array",
                "plan",
            )
        })?;

        let mut step_ids = Vec::with_capacity(plan.steps.len());
        let mut outputs_by_step = HashMap::with_capacity(plan.steps.len());
        let mut depends_by_step: HashMap<String, Vec<String>> =
            HashMap::with_capacity(plan.steps.len());
        for step in &plan.steps {
            if depends_by_step
                .insert(step.id.clone(), step.depends_on.clone())
                .is_none()
            {
                step_ids.push(step.id.clone());
            }
            outputs_by_step.insert(step.id.clone(), step.outputs.clone());
        }

        Ok(Self {
            plan,
            step_ids,
            outputs_by_step,
            depends_by_step,
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.plan.steps
    }

    pub fn contains_step(&self, id: &str) -> bool {
        self.depends_by_step.contains_key(id)
    }

    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.depends_by_step
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn outputs_of(&self, id: &str) -> &[String] {
        self.outputs_by_step
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_mapping_plan_is_fatal() {
        let issue = PlanModel::build(&json!("plan")).expect_err("fatal");
        assert_eq!(issue.code, IssueCode::E999);
        assert_eq!(issue.location, "plan");
        assert!(issue.message.contains("missing 'steps'"));
    }

    #[test]
    fn indexes_outputs_and_dependencies_by_id() {
        let model = PlanModel::build(&json!({
            "steps": [
                {"id": "a", "tool": "t", "outputs": ["x"]},
                {"tool": "t", "depends_on": ["a"]}
            ]
        }))
        .expect("model");
        assert_eq!(model.outputs_by_step["a"], vec!["x"]);
        assert_eq!(model.dependencies_of("step2"), ["a".to_string()]);
        assert!(model.contains_step("step2"));
        assert!(model.dependencies_of("missing").is_empty());
    }

    #[test]
    fn repeated_ids_keep_last_seen_entry() {
        let model = PlanModel::build(&json!({
            "steps": [
                {"id": "a", "tool": "t", "outputs": ["first"]},
                {"id": "a", "tool": "t", "outputs": ["second"]}
            ]
        }))
        .expect("model");
        assert_eq!(model.outputs_by_step["a"], vec!["second"]);
        assert_eq!(model.step_ids, vec!["a"]);
    }

    #[test]
    fn step_ids_follow_first_appearance() {
        let model = PlanModel::build(&json!({
            "steps": [
                {"id": "b", "tool": "t"},
                {"id": "a", "tool": "t"},
                {"id": "b", "tool": "t"}
            ]
        }))
        .expect("model");
        assert_eq!(model.step_ids, vec!["b", "a"]);
    }
}
