//! Plan load/save helpers with size limits.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::debug;

use crate::io::config::LimitsConfig;

/// Load a plan document from disk.
///
/// Only JSON syntax and size limits are enforced here; the shape of the
/// document is the linter's job, so a non-plan JSON value is returned as-is.
pub fn load_plan(path: &Path, limits: &LimitsConfig) -> Result<Value> {
    let meta = fs::metadata(path).with_context(|| format!("stat plan {}", path.display()))?;
    if meta.len() > limits.max_plan_bytes {
        bail!(
            "plan {} is {} bytes, limit is {}",
            path.display(),
            meta.len(),
            limits.max_plan_bytes
        );
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read plan {}", path.display()))?;
    let plan: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse plan {}", path.display()))?;
    check_step_limit(&plan, limits)?;
    debug!(path = %path.display(), bytes = meta.len(), "plan loaded");
    Ok(plan)
}

/// Write plan to disk as pretty-printed JSON with trailing newline.
pub fn write_plan(path: &Path, plan: &Value) -> Result<()> {
    let buf = render_plan(plan)?;
    fs::write(path, buf).with_context(|| format!("write plan {}", path.display()))
}

/// Pretty-printed JSON with trailing newline.
pub fn render_plan(plan: &Value) -> Result<String> {
    let mut buf = serde_json::to_string_pretty(plan).context("serialize plan")?;
    buf.push('\n');
    Ok(buf)
}

fn check_step_limit(plan: &Value, limits: &LimitsConfig) -> Result<()> {
    let steps = plan
        .get("steps")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if steps > limits.max_steps {
        bail!("plan has {} steps, limit is {}", steps, limits.max_steps);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Verifies write → load round-trip preserves the document.
    #[test]
    fn load_and_write_plan_round_trip() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("plan.json");
        let plan = json!({"description": "d", "steps": [{"id": "a", "tool": "t"}]});
        write_plan(&path, &plan).expect("write plan");

        let loaded = load_plan(&path, &LimitsConfig::default()).expect("load plan");
        assert_eq!(loaded, plan);
        assert!(fs::read_to_string(&path).expect("read").ends_with("}\n"));
    }

    #[test]
    fn non_plan_json_is_returned_for_linting() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("plan.json");
        fs::write(&path, "[1, 2]").expect("write");
        assert_eq!(load_plan(&path, &LimitsConfig::default()).expect("load"), json!([1, 2]));
    }

    #[test]
    fn rejects_invalid_json() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("plan.json");
        fs::write(&path, "{not json").expect("write");
        let err = load_plan(&path, &LimitsConfig::default()).expect_err("invalid");
        assert!(err.to_string().contains("parse plan"));
    }

    #[test]
    fn enforces_byte_and_step_limits() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("plan.json");
        write_plan(
            &path,
            &json!({"steps": [{"tool": "a"}, {"tool": "b"}, {"tool": "c"}]}),
        )
        .expect("write");

        let tight_steps = LimitsConfig {
            max_steps: 2,
            ..LimitsConfig::default()
        };
        let err = load_plan(&path, &tight_steps).expect_err("too many steps");
        assert!(err.to_string().contains("3 steps, limit is 2"));

        let tight_bytes = LimitsConfig {
            max_plan_bytes: 8,
            ..LimitsConfig::default()
        };
        let err = load_plan(&path, &tight_bytes).expect_err("too large");
        assert!(err.to_string().contains("limit is 8"));
    }
}
