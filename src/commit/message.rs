// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.
//!
//! Parsing is total: every input, including the empty string, yields a
//! [`ParsedMessage`]. Deciding whether the result is acceptable is left to
//! the rule engine.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for splitting a conventional header into its parts.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[\w-]+)(?:\((?P<scope>[^()]*)\))?(?P<breaking>!)?:(?P<subject>.*)$"
    )
    .expect("header regex is valid");
}

/// A commit message split into header, body and footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMessage {
    /// The first line, untouched.
    pub header: String,
    /// Commit type (feat, fix, etc.). Empty when the header has no type.
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line, trimmed.
    pub subject: String,
    /// Whether the header carries a `!` breaking marker.
    pub breaking: bool,
    /// Body lines, blank lines removed.
    pub body: Vec<String>,
    /// Footer lines.
    pub footer: Vec<String>,
    /// Whether a blank line preceded the body.
    pub body_separated: bool,
    /// Whether a blank line preceded the footer.
    pub footer_separated: bool,
    /// 1-based line where the body starts.
    pub body_line: Option<usize>,
    /// 1-based line where the footer starts.
    pub footer_line: Option<usize>,
}

/// A run of non-blank lines.
struct Paragraph {
    start_line: usize,
    separated: bool,
    lines: Vec<String>,
}

impl ParsedMessage {
    /// Parse a commit message. Never fails.
    pub fn parse(raw: &str) -> Self {
        let mut lines = raw.lines().enumerate();
        let header = lines.next().map(|(_, l)| l.to_string()).unwrap_or_default();

        let mut message = Self {
            header,
            ..Self::default()
        };
        message.split_header();

        let mut paragraphs = collect_paragraphs(lines);
        if paragraphs.len() >= 2 {
            if let Some(last) = paragraphs.pop() {
                message.footer = last.lines;
                message.footer_separated = last.separated;
                message.footer_line = Some(last.start_line);
            }
        }

        if let Some(first) = paragraphs.first() {
            message.body_separated = first.separated;
            message.body_line = Some(first.start_line);
        }
        message.body = paragraphs.into_iter().flat_map(|p| p.lines).collect();

        message
    }

    /// Fill type, scope, breaking flag and subject from the header.
    fn split_header(&mut self) {
        match HEADER_REGEX.captures(&self.header) {
            Some(captures) => {
                self.commit_type = captures
                    .name("type")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                self.scope = captures
                    .name("scope")
                    .map(|m| m.as_str().trim().to_string())
                    .filter(|s| !s.is_empty());
                self.breaking = captures.name("breaking").is_some();
                self.subject = captures
                    .name("subject")
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default();
            }
            None => {
                // No recognizable type: the whole header is the subject
                self.subject = self.header.trim().to_string();
            }
        }
    }

    /// Header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }

    /// Whether the message has a body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Whether the message has a footer.
    pub fn has_footer(&self) -> bool {
        !self.footer.is_empty()
    }
}

/// Group the lines after the header into blank-line separated paragraphs.
fn collect_paragraphs<'a>(lines: impl Iterator<Item = (usize, &'a str)>) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current: Option<Paragraph> = None;
    let mut saw_blank = false;

    for (idx, line) in lines {
        if line.trim().is_empty() {
            if let Some(paragraph) = current.take() {
                paragraphs.push(paragraph);
            }
            saw_blank = true;
            continue;
        }

        match current.as_mut() {
            Some(paragraph) => paragraph.lines.push(line.to_string()),
            None => {
                current = Some(Paragraph {
                    start_line: idx + 1,
                    separated: saw_blank,
                    lines: vec![line.to_string()],
                });
                saw_blank = false;
            }
        }
    }

    if let Some(paragraph) = current {
        paragraphs.push(paragraph);
    }

    paragraphs
}
