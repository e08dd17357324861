//! SARIF 2.1.0 export for CI integrations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::result::LintResult;
use crate::core::types::Issue;

pub const SARIF_SCHEMA: &str = "https://json.schemastore.org/sarif-2.1.0.json";
pub const SARIF_VERSION: &str = "2.1.0";
pub const DRIVER_NAME: &str = "planlint";
/// Synthetic artifact every result points at.
pub const PLAN_ARTIFACT_URI: &str = "plan.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifLog {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub runs: Vec<SarifRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifDriver {
    pub name: String,
    pub version: String,
    pub rules: Vec<SarifRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRule {
    pub id: String,
    pub name: String,
    pub short_description: SarifText,
    pub default_configuration: SarifConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifConfiguration {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: String,
    pub level: String,
    pub message: SarifText,
    pub locations: Vec<SarifLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    pub artifact_location: SarifArtifactLocation,
    pub region: SarifRegion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarifArtifactLocation {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRegion {
    pub start_line: u32,
    pub snippet: SarifText,
}

impl LintResult {
    /// Build the SARIF log: one run, rules catalogued in first-seen order.
    pub fn to_sarif(&self) -> SarifLog {
        let mut seen = HashSet::new();
        let rules = self
            .issues()
            .iter()
            .filter(|issue| seen.insert(issue.code))
            .map(rule_for)
            .collect();
        let results = self.issues().iter().map(result_for).collect();

        SarifLog {
            schema: SARIF_SCHEMA.to_string(),
            version: SARIF_VERSION.to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: DRIVER_NAME.to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                        rules,
                    },
                },
                results,
            }],
        }
    }
}

fn rule_for(issue: &Issue) -> SarifRule {
    SarifRule {
        id: issue.code.to_string(),
        name: issue.code.to_string(),
        short_description: SarifText {
            text: issue.code.description().to_string(),
        },
        default_configuration: SarifConfiguration {
            level: issue.code.severity().to_string(),
        },
    }
}

fn result_for(issue: &Issue) -> SarifResult {
    SarifResult {
        rule_id: issue.code.to_string(),
        level: issue.severity.to_string(),
        message: SarifText {
            text: issue.message.clone(),
        },
        locations: vec![SarifLocation {
            physical_location: SarifPhysicalLocation {
                artifact_location: SarifArtifactLocation {
                    uri: PLAN_ARTIFACT_URI.to_string(),
                },
                region: SarifRegion {
                    start_line: 1,
                    snippet: SarifText {
                        text: issue.location.clone(),
                    },
                },
            },
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IssueCode;

    #[test]
    fn catalogs_each_code_once_and_maps_levels() {
        let result = LintResult::new(vec![
            Issue::new(IssueCode::E002, "Missing required parameter 'a'", "s1.parameters"),
            Issue::new(IssueCode::E002, "Missing required parameter 'b'", "s1.parameters"),
            Issue::new(IssueCode::W002, "Output 'x' is never referenced", "s2.outputs"),
        ]);
        let log = result.to_sarif();
        let run = &log.runs[0];

        let rule_ids: Vec<&str> = run.tool.driver.rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(rule_ids, vec!["E002", "W002"]);
        assert_eq!(run.results.len(), 3);
        assert_eq!(run.results[0].level, "error");
        assert_eq!(run.results[2].level, "warning");
        assert_eq!(
            run.results[2].locations[0].physical_location.region.snippet.text,
            "s2.outputs"
        );
    }

    #[test]
    fn serializes_with_sarif_field_names() {
        let result = LintResult::new(vec![Issue::new(IssueCode::W001, "dup", "b")]);
        let json = serde_json::to_value(result.to_sarif()).expect("json");
        assert_eq!(json["$schema"], SARIF_SCHEMA);
        assert_eq!(json["version"], "2.1.0");
        assert_eq!(json["runs"][0]["tool"]["driver"]["name"], "planlint");
        assert_eq!(
            json["runs"][0]["tool"]["driver"]["rules"][0]["defaultConfiguration"]["level"],
            "warning"
        );
        let location = &json["runs"][0]["results"][0]["locations"][0]["physicalLocation"];
        assert_eq!(location["artifactLocation"]["uri"], "plan.json");
        assert_eq!(location["region"]["startLine"], 1);
        assert_eq!(json["runs"][0]["results"][0]["ruleId"], "W001");
    }

    #[test]
    fn empty_result_has_no_rules() {
        let log = LintResult::default().to_sarif();
        assert!(log.runs[0].tool.driver.rules.is_empty());
        assert!(log.runs[0].results.is_empty());
    }
}
