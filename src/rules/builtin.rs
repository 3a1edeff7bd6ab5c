// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Each rule is a plain function of the parsed message and the rule set.
//! The table order is the evaluation order.

use crate::commit::ParsedMessage;

use super::engine::RuleSet;
use super::violation::Violation;

/// Signature shared by every rule check.
pub type CheckFn = fn(&ParsedMessage, &RuleSet) -> Option<Violation>;

/// A named entry in the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Rule name, used to disable it from configuration.
    pub name: &'static str,
    /// One-line description for `cml rules`.
    pub description: &'static str,
    /// The check itself.
    pub check: CheckFn,
}

static BUILTIN_RULES: [Rule; 8] = [
    Rule {
        name: "type-present",
        description: "Header starts with a recognized type",
        check: check_type,
    },
    Rule {
        name: "subject-present",
        description: "Header has a non-empty subject",
        check: check_subject_present,
    },
    Rule {
        name: "subject-case",
        description: "Subject does not start with a capital letter",
        check: check_subject_case,
    },
    Rule {
        name: "subject-mood",
        description: "Subject starts with an imperative verb (heuristic)",
        check: check_subject_mood,
    },
    Rule {
        name: "subject-punctuation",
        description: "Subject does not end with a period",
        check: check_subject_trailing_period,
    },
    Rule {
        name: "header-length",
        description: "Header fits the configured length",
        check: check_header_length,
    },
    Rule {
        name: "blank-line-separation",
        description: "Body and footer follow a blank line",
        check: check_blank_line_separation,
    },
    Rule {
        name: "body-or-footer-empty-commit",
        description: "Features and fixes explain their motivation",
        check: check_motivation,
    },
];

/// Get the built-in rules in evaluation order.
pub fn builtin_rules() -> &'static [Rule] {
    &BUILTIN_RULES
}

/// Check that the type is present and allowed.
fn check_type(message: &ParsedMessage, rules: &RuleSet) -> Option<Violation> {
    let suggestion = format!("Use one of: {}", rules.allowed_types.join(", "));

    if message.commit_type.is_empty() {
        Some(
            Violation::error("missing-type", "Commit type is missing")
                .with_suggestion(format!("Write the header as type(scope): subject. {}", suggestion)),
        )
    } else if !rules.is_allowed_type(&message.commit_type) {
        Some(
            Violation::error(
                "unknown-type",
                format!("Commit type '{}' is not recognized", message.commit_type),
            )
            .with_suggestion(suggestion),
        )
    } else {
        None
    }
}

/// Check that there is a subject.
fn check_subject_present(message: &ParsedMessage, _rules: &RuleSet) -> Option<Violation> {
    if message.subject.trim().is_empty() {
        Some(
            Violation::error("missing-subject", "Subject is missing")
                .with_suggestion("Describe the change after the colon"),
        )
    } else {
        None
    }
}

/// Check that the subject does not start with an uppercase letter.
fn check_subject_case(message: &ParsedMessage, _rules: &RuleSet) -> Option<Violation> {
    let first_char = message.subject.chars().next()?;

    if first_char.is_alphabetic() && first_char.is_uppercase() {
        Some(
            Violation::error("capitalized-subject", "Subject should start with lowercase")
                .with_suggestion("Start the subject with a lowercase letter"),
        )
    } else {
        None
    }
}

/// Check that the subject starts with an imperative verb.
///
/// Flags the first word when it is a known verb root with a past tense,
/// third person or progressive ending (`added`, `fixes`, `updating`).
fn check_subject_mood(message: &ParsedMessage, rules: &RuleSet) -> Option<Violation> {
    let first_word = message.subject.split_whitespace().next()?;
    let word = first_word
        .trim_matches(|c: char| !c.is_alphabetic())
        .to_lowercase();

    let root = rules
        .imperative_verbs
        .iter()
        .find(|root| is_inflection_of(&word, root))?;

    Some(
        Violation::warning(
            "subject-mood-warning",
            format!("Subject should use imperative mood (found '{}')", first_word),
        )
        .with_suggestion(format!(
            "Use imperative form like '{}' instead of '{}'",
            root, first_word
        )),
    )
}

/// Whether `word` is `root` with an `s`, `es`, `d`, `ed` or `ing` ending.
fn is_inflection_of(word: &str, root: &str) -> bool {
    if let Some(ending) = word.strip_prefix(root) {
        if matches!(ending, "s" | "es" | "ed" | "ing") || (ending == "d" && root.ends_with('e')) {
            return true;
        }
    }

    // update -> updating
    root.strip_suffix('e')
        .and_then(|stem| word.strip_prefix(stem))
        .map_or(false, |ending| ending == "ing")
}

/// Check if subject ends with a period.
fn check_subject_trailing_period(message: &ParsedMessage, _rules: &RuleSet) -> Option<Violation> {
    if message.subject.ends_with('.') {
        Some(
            Violation::error("trailing-period", "Subject should not end with a period")
                .with_suggestion("Remove the trailing period"),
        )
    } else {
        None
    }
}

/// Check the header length against the soft and hard limits.
fn check_header_length(message: &ParsedMessage, rules: &RuleSet) -> Option<Violation> {
    let len = message.header_len();
    let max = rules.max_header_length;
    let hard_max = rules.hard_max_header_length;

    let text = format!("Header is too long: {} characters (max: {})", len, max);
    let suggestion = format!("Shorten the header to {} characters or less", max);

    if len > hard_max {
        Some(Violation::error("header-too-long", text).with_suggestion(suggestion))
    } else if len > max {
        Some(Violation::warning("header-too-long", text).with_suggestion(suggestion))
    } else {
        None
    }
}

/// Check that body and footer are separated from what precedes them.
fn check_blank_line_separation(message: &ParsedMessage, _rules: &RuleSet) -> Option<Violation> {
    let section = if message.has_body() && !message.body_separated {
        Some(("Body", message.body_line))
    } else if message.has_footer() && !message.footer_separated {
        Some(("Footer", message.footer_line))
    } else {
        None
    };

    let (name, line) = section?;
    Some(
        Violation::error(
            "missing-blank-line",
            format!("{} must be separated from the previous section by a blank line", name),
        )
        .at_line(line.unwrap_or(2))
        .with_suggestion("Insert an empty line before it"),
    )
}

/// Check that features and fixes carry a body or footer.
fn check_motivation(message: &ParsedMessage, rules: &RuleSet) -> Option<Violation> {
    let needs_motivation = rules
        .motivation_types
        .iter()
        .any(|t| *t == message.commit_type);

    if needs_motivation && !message.has_body() && !message.has_footer() {
        Some(
            Violation::warning(
                "missing-motivation",
                format!(
                    "'{}' commits should explain the change in a body or footer",
                    message.commit_type
                ),
            )
            .with_suggestion("Add a body describing why the change is needed"),
        )
    } else {
        None
    }
}
