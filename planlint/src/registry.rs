use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema for one tool parameter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParamSpec {
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Parameter schema for a registered tool.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolSpec {
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamSpec>,
}

impl ToolSpec {
    /// Names of parameters marked `required`, in name order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name.as_str())
    }
}

/// Registry of tools a plan may reference, keyed by tool name.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolSpec>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a tool.
    pub fn insert(&mut self, name: impl Into<String>, spec: ToolSpec) {
        self.tools.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Tool names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl FromIterator<(String, ToolSpec)> for ToolRegistry {
    fn from_iter<I: IntoIterator<Item = (String, ToolSpec)>>(iter: I) -> Self {
        Self {
            tools: iter.into_iter().collect(),
        }
    }
}
