use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single tool invocation inside a plan.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Step {
    pub id: String,
    pub tool: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl Step {
    /// Build a typed step from raw plan input.
    ///
    /// `position` is 1-based and only used when the step carries no string id.
    /// Fields of the wrong shape fall back to empty values; the rules report
    /// what is missing.
    pub fn from_value(value: &Value, position: usize) -> Self {
        let Some(obj) = value.as_object() else {
            return Self {
                id: default_step_id(position),
                ..Self::default()
            };
        };

        let id = obj
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| default_step_id(position));
        let tool = obj
            .get("tool")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let parameters = obj
            .get("parameters")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self {
            id,
            tool,
            parameters,
            depends_on: string_list(obj.get("depends_on")),
            outputs: string_list(obj.get("outputs")),
        }
    }

    /// Parameters serialized as compact JSON text.
    pub fn parameters_text(&self) -> String {
        Value::Object(self.parameters.clone()).to_string()
    }
}

/// Typed view of a plan container.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub steps: Vec<Step>,
}

impl Plan {
    /// Returns `None` when `value` is not a mapping with a `steps` sequence.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let steps = obj.get("steps")?.as_array()?;
        Some(Self {
            description: obj
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            steps: steps
                .iter()
                .enumerate()
                .map(|(idx, step)| Step::from_value(step, idx + 1))
                .collect(),
        })
    }
}

/// Identifier assigned to a step without an explicit id.
pub fn default_step_id(position: usize) -> String {
    format!("step{position}")
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
