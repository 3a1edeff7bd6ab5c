// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Violation types produced by the rules.

use serde::Serialize;
use std::fmt;

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Shown, never fails a run on its own.
    Warning,
    /// Fails the run.
    Error,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Violation id for programmatic handling, e.g. `missing-type`.
    pub rule_id: &'static str,
    /// Severity of the violation.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// 1-based line the violation refers to.
    pub line: usize,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
}

impl Violation {
    /// Create an error-level violation.
    pub fn error(rule_id: &'static str, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Error, message)
    }

    /// Create a warning-level violation.
    pub fn warning(rule_id: &'static str, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Warning, message)
    }

    fn new(rule_id: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            line: 1,
            suggestion: None,
        }
    }

    /// Set the line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Whether this violation fails a run.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn test_violation_builder() {
        let v = Violation::warning("missing-blank-line", "Body must follow a blank line")
            .at_line(2)
            .with_suggestion("Insert an empty line");
        assert!(!v.is_error());
        assert_eq!(v.line, 2);
        assert_eq!(v.suggestion.as_deref(), Some("Insert an empty line"));
    }

    #[test]
    fn test_violation_serializes_lowercase_severity() {
        let v = Violation::error("missing-type", "Commit type is missing");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["rule_id"], "missing-type");
        assert_eq!(json["line"], 1);
    }
}
