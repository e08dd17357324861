//! Tool registry loading with JSON Schema validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::Draft;
use serde_json::Value;
use tracing::debug;

use crate::registry::ToolRegistry;

const REGISTRY_SCHEMA: &str = include_str!("../../schemas/tool_registry.schema.json");

/// Load and validate a tool registry from disk.
pub fn load_registry(path: &Path) -> Result<ToolRegistry> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read registry {}", path.display()))?;
    let registry = parse_registry(&contents)
        .with_context(|| format!("load registry {}", path.display()))?;
    debug!(path = %path.display(), tools = registry.len(), "registry loaded");
    Ok(registry)
}

/// Parse registry JSON text: schema conformance, then typed deserialization.
pub fn parse_registry(contents: &str) -> Result<ToolRegistry> {
    let value: Value = serde_json::from_str(contents).context("parse registry json")?;
    validate_schema(&value)?;
    serde_json::from_value(value).context("deserialize registry")
}

/// Validate against the embedded registry schema (Draft 2020-12).
fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(REGISTRY_SCHEMA).context("parse registry schema")?;
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| anyhow!("invalid registry schema: {}", err))?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        return Err(anyhow!(
            "registry schema validation failed:\n- {}",
            messages.join("\n- ")
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_registry() {
        let registry = parse_registry(
            r#"{"search_web": {"parameters": {"query": {"type": "string", "required": true}}}}"#,
        )
        .expect("registry");
        assert!(registry.contains("search_web"));
    }

    #[test]
    fn lists_every_schema_violation() {
        let err = parse_registry(
            r#"{
                "a": {"parameters": {"q": {"required": true}}},
                "b": {"parameters": {"q": {"type": "string", "required": "yes"}}}
            }"#,
        )
        .expect_err("invalid");
        let message = format!("{err:#}");
        assert!(message.contains("registry schema validation failed"));
        assert!(message.contains("\"type\" is a required property"));
        assert!(message.contains("is not of type \"boolean\""));
    }

    #[test]
    fn rejects_non_object_registry() {
        assert!(parse_registry("[]").is_err());
    }

    #[test]
    fn load_reports_path_context() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("tools.json");
        fs::write(&path, "{}").expect("write");
        assert!(load_registry(&path).expect("load").is_empty());

        let err = load_registry(&temp.path().join("missing.json")).expect_err("missing");
        assert!(err.to_string().contains("read registry"));
    }
}
