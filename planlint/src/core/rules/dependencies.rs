//! E003: dependency reference validation and cycle detection.

use std::collections::HashSet;

use crate::core::model::PlanModel;
use crate::core::rules::{LintContext, Rule};
use crate::core::types::{Issue, IssueCode};

pub struct DependencyRule;

impl Rule for DependencyRule {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn check(&self, ctx: &LintContext<'_>, issues: &mut Vec<Issue>) {
        let model = ctx.model;
        for id in &model.step_ids {
            for dep in model.dependencies_of(id) {
                if !model.contains_step(dep) {
                    issues.push(Issue::new(
                        IssueCode::E003,
                        format!("Dependency '{dep}' does not exist"),
                        format!("{id}.depends_on"),
                    ));
                }
            }
        }

        for id in find_cycles(model) {
            issues.push(Issue::new(
                IssueCode::E003,
                format!("Circular dependency detected involving '{id}'"),
                format!("{id}.depends_on"),
            ));
        }
    }
}

/// Iterative three-colour DFS over `depends_on` edges.
///
/// Returns, in discovery order, the node at which each cycle closed. After a
/// cycle is found every node on the current path is marked done so the same
/// cycle is not reported again from another entry point. Edges to unknown ids
/// are ignored.
pub fn find_cycles(model: &PlanModel) -> Vec<&str> {
    let mut found = Vec::new();
    let mut done: HashSet<&str> = HashSet::new();
    let mut on_stack: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&str, usize)> = Vec::new();

    for root in &model.step_ids {
        let root = root.as_str();
        if done.contains(root) {
            continue;
        }
        stack.push((root, 0));
        on_stack.insert(root);

        while let Some(&(node, next)) = stack.last() {
            let Some(dep) = model.dependencies_of(node).get(next) else {
                stack.pop();
                on_stack.remove(node);
                done.insert(node);
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            let dep = dep.as_str();
            if !model.contains_step(dep) || done.contains(dep) {
                continue;
            }
            if on_stack.contains(dep) {
                found.push(dep);
                done.extend(on_stack.drain());
                stack.clear();
                break;
            }
            on_stack.insert(dep);
            stack.push((dep, 0));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::LintOptions;
    use crate::registry::ToolRegistry;
    use serde_json::{Value, json};

    fn run(plan: Value) -> Vec<Issue> {
        let model = PlanModel::build(&plan).expect("model");
        let registry = ToolRegistry::new();
        let options = LintOptions::default();
        let ctx = LintContext {
            model: &model,
            registry: &registry,
            options: &options,
        };
        let mut issues = Vec::new();
        DependencyRule.check(&ctx, &mut issues);
        issues
    }

    fn chain(edges: &[(&str, Vec<&str>)]) -> Value {
        let steps: Vec<Value> = edges
            .iter()
            .map(|(id, deps)| json!({"id": id, "tool": "t", "depends_on": deps}))
            .collect();
        json!({ "steps": steps })
    }

    #[test]
    fn missing_dependency_is_reported() {
        let issues = run(chain(&[("a", vec![]), ("b", vec!["a", "ghost"])]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "b.depends_on");
        assert_eq!(issues[0].message, "Dependency 'ghost' does not exist");
    }

    #[test]
    fn repeated_id_checks_last_seen_dependencies_once() {
        let issues = run(chain(&[("a", vec!["ghost"]), ("a", vec!["ghost"])]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "a.depends_on");

        let issues = run(chain(&[("a", vec!["ghost"]), ("a", vec![])]));
        assert!(issues.is_empty());
    }

    #[test]
    fn three_step_cycle_reported_once() {
        let issues = run(chain(&[("a", vec!["c"]), ("b", vec!["a"]), ("c", vec!["b"])]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::E003);
        assert!(issues[0].message.contains("Circular dependency"));
        assert!(["a", "b", "c"].contains(&issues[0].step_id()));
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let issues = run(chain(&[("a", vec!["a"])]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Circular dependency detected involving 'a'");
    }

    #[test]
    fn diamond_is_acyclic() {
        let issues = run(chain(&[
            ("a", vec![]),
            ("b", vec!["a"]),
            ("c", vec!["a"]),
            ("d", vec!["b", "c"]),
        ]));
        assert!(issues.is_empty());
    }

    #[test]
    fn disjoint_cycles_are_each_reported() {
        let issues = run(chain(&[
            ("a", vec!["b"]),
            ("b", vec!["a"]),
            ("c", vec!["d"]),
            ("d", vec!["c"]),
        ]));
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let edges: Vec<(String, Vec<String>)> = (0..50_000)
            .map(|i| {
                let deps = if i == 0 { Vec::new() } else { vec![format!("n{}", i - 1)] };
                (format!("n{i}"), deps)
            })
            .collect();
        let steps: Vec<Value> = edges
            .iter()
            .rev()
            .map(|(id, deps)| json!({"id": id, "tool": "t", "depends_on": deps}))
            .collect();
        assert!(run(json!({ "steps": steps })).is_empty());
    }
}
