//! Shared deterministic types for lint rules.
//!
//! These types define the stable contract between rules, the result
//! collector, and the report renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue severity. Informational only; callers decide how to gate on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable issue taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IssueCode {
    /// Plan container malformed.
    E999,
    /// Unknown tool reference.
    E001,
    /// Invalid or missing parameter.
    E002,
    /// Missing dependency or circular dependency.
    E003,
    /// Secret pattern found in parameters.
    E004,
    /// Duplicate step.
    W001,
    /// Declared output never referenced.
    W002,
}

impl IssueCode {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::E999 => "E999",
            IssueCode::E001 => "E001",
            IssueCode::E002 => "E002",
            IssueCode::E003 => "E003",
            IssueCode::E004 => "E004",
            IssueCode::W001 => "W001",
            IssueCode::W002 => "W002",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            IssueCode::W001 | IssueCode::W002 => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// One-line rule description for report catalogs.
    pub fn description(self) -> &'static str {
        match self {
            IssueCode::E999 => "Plan container is malformed",
            IssueCode::E001 => "Unknown tool reference",
            IssueCode::E002 => "Invalid or missing parameter",
            IssueCode::E003 => "Missing or circular dependency",
            IssueCode::E004 => "Potential secret exposed in parameters",
            IssueCode::W001 => "Duplicate step",
            IssueCode::W002 => "Declared output is never referenced",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub severity: Severity,
    pub message: String,
    /// Dotted path into the plan, e.g. `step2.parameters.query`.
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl Issue {
    /// Create an issue whose severity follows its code.
    pub fn new(code: IssueCode, message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            location: location.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: Option<String>) -> Self {
        self.fix = fix;
        self
    }

    /// Step id portion of the location (text before the first `.`).
    pub fn step_id(&self) -> &str {
        self.location
            .split_once('.')
            .map_or(self.location.as_str(), |(head, _)| head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_code() {
        assert_eq!(Issue::new(IssueCode::E003, "m", "a").severity, Severity::Error);
        assert_eq!(Issue::new(IssueCode::W002, "m", "a").severity, Severity::Warning);
    }

    #[test]
    fn serializes_code_and_severity_as_strings() {
        let issue = Issue::new(IssueCode::W001, "dup", "step2");
        let json = serde_json::to_value(&issue).expect("json");
        assert_eq!(json["code"], "W001");
        assert_eq!(json["severity"], "warning");
        assert!(json.get("fix").is_none());
    }

    #[test]
    fn step_id_strips_path_suffix() {
        assert_eq!(Issue::new(IssueCode::E002, "m", "fetch.parameters.q").step_id(), "fetch");
        assert_eq!(Issue::new(IssueCode::W001, "m", "fetch").step_id(), "fetch");
    }
}
