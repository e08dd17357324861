//! Deterministic static analyzer for AI-agent execution plans.
//!
//! A plan is an ordered list of steps, each invoking a named tool with
//! parameters and declaring dependencies on other steps. The linter reports
//! unknown tools, malformed parameters, missing or circular dependencies,
//! leaked credentials, duplicated work, and unused outputs before the plan
//! runs. It never executes or mutates the plan.
//!
//! - **[`core`]**: Pure, deterministic logic (plan model, rules, reports,
//!   patching). No I/O, fully testable in isolation.
//! - **[`io`]**: Config, plan, and registry files.
//!
//! Orchestration modules ([`check`], [`fix`]) coordinate core logic with I/O
//! to implement CLI commands.
//!
//! ```
//! use planlint::{LintOptions, ToolRegistry, lint};
//! use serde_json::json;
//!
//! let registry: ToolRegistry = serde_json::from_value(json!({
//!     "search_web": {"parameters": {"query": {"type": "string", "required": true}}}
//! }))
//! .unwrap();
//! let plan = json!({"steps": [{"id": "s1", "tool": "serch_web", "parameters": {"query": "rust"}}]});
//!
//! let result = lint(&plan, &registry, &LintOptions { autofix: true, ..Default::default() });
//! assert!(result.has_errors());
//! let fixed = result.apply_patch(&plan);
//! assert_eq!(fixed["steps"][0]["tool"], "search_web");
//! ```

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod fix;
pub mod io;
pub mod logging;
pub mod plan;
pub mod registry;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::lint::lint;
pub use crate::core::result::LintResult;
pub use crate::core::rules::LintOptions;
pub use crate::core::types::{Issue, IssueCode, Severity};
pub use crate::registry::{ParamSpec, ToolRegistry, ToolSpec};
