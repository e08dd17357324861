//! Test-only helpers for constructing plans and registries.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::registry::ToolRegistry;

/// Registry JSON used across tests: `search_web`, `summarize`, `send_email`.
pub fn sample_registry_json() -> Value {
    json!({
        "search_web": {
            "parameters": {
                "query": {"type": "string", "required": true},
                "limit": {"type": "integer", "required": false, "default": 10}
            }
        },
        "summarize": {
            "parameters": {
                "text": {"type": "string", "required": true},
                "max_words": {"type": "integer"}
            }
        },
        "send_email": {
            "parameters": {
                "to": {"type": "string", "required": true},
                "subject": {"type": "string", "required": true},
                "body": {"type": "string"}
            }
        }
    })
}

/// Typed form of [`sample_registry_json`].
pub fn sample_registry() -> ToolRegistry {
    serde_json::from_value(sample_registry_json()).expect("sample registry")
}

/// Create a step with an explicit id.
pub fn step(id: &str, tool: &str, parameters: Value) -> Value {
    json!({"id": id, "tool": tool, "parameters": parameters})
}

/// Wrap steps in a plan container.
pub fn plan(steps: Vec<Value>) -> Value {
    json!({ "steps": steps })
}

/// Write `value` as pretty JSON to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    let payload = serde_json::to_string_pretty(value).expect("serialize fixture");
    fs::write(&path, payload).expect("write fixture");
    path
}
