// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Message cleanup before parsing.
//!
//! A commit-msg hook sees the message before git cleans it up. Cleanup drops
//! leading blank lines and, when enabled, `#` comment lines and everything
//! below the scissors line. Every kept line remembers where it came from, so
//! diagnostics can point into the original file.

/// Marker git places above the diff in verbose commit messages.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// Cleaned message text plus the source line of each kept line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanMessage {
    /// Text handed to the parser.
    pub text: String,
    source_lines: Vec<usize>,
}

impl CleanMessage {
    /// Map a 1-based line of the cleaned text to its line in the source.
    pub fn source_line(&self, line: usize) -> usize {
        line.checked_sub(1)
            .and_then(|idx| self.source_lines.get(idx))
            .copied()
            .unwrap_or(line)
    }
}

/// Clean raw message text, keeping track of source line numbers.
pub fn clean_message(raw: &str, strip_comments: bool) -> CleanMessage {
    let mut kept = Vec::new();
    let mut source_lines = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        if strip_comments && line.starts_with('#') {
            if line.contains(SCISSORS) {
                break;
            }
            continue;
        }
        if kept.is_empty() && line.trim().is_empty() {
            continue;
        }
        kept.push(line);
        source_lines.push(idx + 1);
    }

    CleanMessage {
        text: kept.join("\n"),
        source_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleEngine;

    #[test]
    fn test_strip_comments() {
        let raw = "feat: add x\n# Please enter the commit message\n\nBody\n# trailing";
        assert_eq!(clean_message(raw, true).text, "feat: add x\n\nBody");
    }

    #[test]
    fn test_strip_comments_scissors() {
        let raw = "fix: y\n\nBody\n# ------------------------ >8 ------------------------\ndiff --git a b";
        assert_eq!(clean_message(raw, true).text, "fix: y\n\nBody");
    }

    #[test]
    fn test_keep_comments() {
        let raw = "fix: y\n# note";
        assert_eq!(clean_message(raw, false).text, raw);
    }

    #[test]
    fn test_source_lines_skip_comments() {
        let cleaned = clean_message("feat: add x\n# comment\n# another\nbody straight", true);
        assert_eq!(cleaned.text, "feat: add x\nbody straight");
        assert_eq!(cleaned.source_line(1), 1);
        assert_eq!(cleaned.source_line(2), 4);
    }

    #[test]
    fn test_violation_lines_point_into_source() {
        let cleaned = clean_message("feat: add x\n# comment\n# another\nbody straight", true);
        let lines: Vec<_> = RuleEngine::default()
            .check_str(&cleaned.text)
            .iter()
            .map(|v| (v.rule_id, cleaned.source_line(v.line)))
            .collect();
        assert_eq!(lines, vec![("missing-blank-line", 4)]);
    }

    #[test]
    fn test_leading_blank_lines_dropped() {
        let cleaned = clean_message("\n\nfeat: add x\n\nBecause retries were missing.", false);
        assert_eq!(cleaned.text, "feat: add x\n\nBecause retries were missing.");
        assert_eq!(cleaned.source_line(1), 3);
        assert_eq!(cleaned.source_line(3), 5);
        assert!(RuleEngine::default().check_str(&cleaned.text).is_empty());
    }

    #[test]
    fn test_leading_blank_line_only_warns_on_motivation() {
        let cleaned = clean_message("\nfeat: add x", true);
        let ids: Vec<_> = RuleEngine::default()
            .check_str(&cleaned.text)
            .iter()
            .map(|v| v.rule_id)
            .collect();
        assert_eq!(ids, vec!["missing-motivation"]);
    }

    #[test]
    fn test_empty_input() {
        let cleaned = clean_message("# only a comment\n\n", true);
        assert_eq!(cleaned.text, "");
        assert_eq!(cleaned.source_line(1), 1);
    }
}
