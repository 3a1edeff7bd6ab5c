// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report rendering.

use console::style;

use crate::cli::args::OutputFormat;
use crate::rules::{Severity, Violation};

/// Line emitted when a message has no violations.
pub const SUCCESS_LINE: &str = "ok: commit message follows the convention";

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// 0 to accept the message, 1 to reject it.
    pub exit_code: i32,
    /// Rendered diagnostics.
    pub text: String,
    /// Number of error-level violations.
    pub errors: usize,
    /// Number of warning-level violations.
    pub warnings: usize,
}

impl Report {
    /// Whether the message is accepted.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.errors == 0 {
            if self.warnings == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings)
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors, self.warnings
            )
        }
    }
}

/// Render violations as plain text with the default settings.
pub fn report(violations: &[Violation]) -> Report {
    Reporter::default().render(violations)
}

/// Configurable report renderer.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: OutputFormat,
    strict: bool,
    color: bool,
    hints: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            strict: false,
            color: false,
            hints: false,
        }
    }
}

impl Reporter {
    /// Create a reporter for the given output format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Fail on warnings as well as errors.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Style text output for a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Follow each violation that has a suggestion with a hint line.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Render the violations of one run.
    pub fn render(&self, violations: &[Violation]) -> Report {
        let tally = self.tally(violations);

        let text = match self.format {
            OutputFormat::Text => self.render_text(violations),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.json_value(violations)).unwrap_or_default()
            }
        };

        Report {
            exit_code: i32::from(tally.failed),
            text,
            errors: tally.errors,
            warnings: tally.warnings,
        }
    }

    /// The run as a JSON value.
    pub fn json_value(&self, violations: &[Violation]) -> serde_json::Value {
        let tally = self.tally(violations);

        serde_json::json!({
            "valid": !tally.failed,
            "errors": tally.errors,
            "warnings": tally.warnings,
            "violations": violations,
        })
    }

    fn tally(&self, violations: &[Violation]) -> Tally {
        let errors = violations.iter().filter(|v| v.is_error()).count();
        let warnings = violations.len() - errors;

        Tally {
            errors,
            warnings,
            failed: errors > 0 || (self.strict && warnings > 0),
        }
    }

    /// One line per violation, or the success line.
    fn render_text(&self, violations: &[Violation]) -> String {
        if violations.is_empty() {
            return if self.color {
                style(SUCCESS_LINE).green().to_string()
            } else {
                SUCCESS_LINE.to_string()
            };
        }

        violations
            .iter()
            .map(|v| self.format_violation(v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a violation as `<severity>: <rule-id>: <message>`.
    fn format_violation(&self, violation: &Violation) -> String {
        let mut output = if self.color {
            let severity = match violation.severity {
                Severity::Error => style(violation.severity.as_str()).red().bold(),
                Severity::Warning => style(violation.severity.as_str()).yellow().bold(),
            };
            format!(
                "{}: {}: {}",
                severity,
                style(violation.rule_id).bold(),
                violation.message
            )
        } else {
            format!(
                "{}: {}: {}",
                violation.severity, violation.rule_id, violation.message
            )
        };

        if let Some(suggestion) = violation.suggestion.as_ref().filter(|_| self.hints) {
            if self.color {
                output.push_str(&format!(
                    "\n  {} {}",
                    style("→").dim(),
                    style(suggestion).dim()
                ));
            } else {
                output.push_str(&format!("\n  → {}", suggestion));
            }
        }

        output
    }
}

struct Tally {
    errors: usize,
    warnings: usize,
    failed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Violation> {
        vec![
            Violation::error("missing-type", "Commit type is missing"),
            Violation::warning("missing-motivation", "'feat' commits should explain the change")
                .with_suggestion("Add a body"),
        ]
    }

    #[test]
    fn test_empty_report() {
        let report = report(&[]);
        assert_eq!(report.exit_code, 0);
        assert_eq!(report.text, SUCCESS_LINE);
        assert_eq!(report.summary(), "Valid");
    }

    #[test]
    fn test_text_lines_in_order() {
        let report = report(&sample());
        assert_eq!(report.exit_code, 1);
        assert_eq!(
            report.text,
            "error: missing-type: Commit type is missing\n\
             warning: missing-motivation: 'feat' commits should explain the change"
        );
        assert_eq!(report.summary(), "Invalid (1 errors, 1 warnings)");
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let violations = vec![Violation::warning("header-too-long", "Header is too long")];
        let report = report(&violations);
        assert!(report.is_success());
        assert_eq!(report.text, "warning: header-too-long: Header is too long");
        assert_eq!(report.summary(), "Valid (1 warnings)");
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let violations = vec![Violation::warning("header-too-long", "Header is too long")];
        let report = Reporter::default().with_strict(true).render(&violations);
        assert_eq!(report.exit_code, 1);
    }

    #[test]
    fn test_json_report() {
        let report = Reporter::new(OutputFormat::Json).render(&sample());
        let json: serde_json::Value = serde_json::from_str(&report.text).unwrap();

        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"], 1);
        assert_eq!(json["warnings"], 1);
        assert_eq!(json["violations"][0]["rule_id"], "missing-type");
        assert_eq!(json["violations"][1]["severity"], "warning");
        assert_eq!(json["violations"][1]["suggestion"], "Add a body");
    }

    #[test]
    fn test_colored_report_keeps_content() {
        let report = Reporter::default().with_color(true).render(&sample());
        assert!(report.text.contains("missing-type"));
        assert!(report.text.contains("missing-motivation"));
    }

    #[test]
    fn test_color_alone_keeps_one_line_per_violation() {
        let report = Reporter::default().with_color(true).render(&sample());
        assert_eq!(report.text.lines().count(), 2);
        assert!(!report.text.contains("Add a body"));
    }

    #[test]
    fn test_hints_add_suggestion_lines() {
        let report = Reporter::default().with_hints(true).render(&sample());
        assert_eq!(
            report.text,
            "error: missing-type: Commit type is missing\n\
             warning: missing-motivation: 'feat' commits should explain the change\n  → Add a body"
        );
    }
}
