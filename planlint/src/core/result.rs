//! Ordered issue collection returned by a lint call.

use std::fmt;

use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;

use crate::core::types::{Issue, IssueCode, Severity};

/// Issues from one lint call, in detection order. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintResult {
    issues: Vec<Issue>,
}

impl LintResult {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn issues_with_code(&self, code: IssueCode) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.code == code)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

impl fmt::Display for LintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return f.write_str("✓ No issues found");
        }

        for issue in &self.issues {
            let glyph = match issue.severity {
                Severity::Error => '✗',
                Severity::Warning => '⚠',
            };
            writeln!(
                f,
                "{} {}: {} {}",
                glyph, issue.location, issue.code, issue.message
            )?;
        }

        writeln!(f)?;
        write!(
            f,
            "Found {} errors, {} warnings",
            self.error_count(),
            self.warning_count()
        )?;
        if self.issues.iter().any(|i| i.fix.is_some()) {
            write!(f, "\nRun with --autofix to attempt automatic fixes")?;
        }
        Ok(())
    }
}

impl Serialize for LintResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LintResult", 3)?;
        state.serialize_field("issues", &self.issues)?;
        state.serialize_field("errors", &self.error_count())?;
        state.serialize_field("warnings", &self.warning_count())?;
        state.end()
    }
}
