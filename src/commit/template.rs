// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message template.
//!
//! Renders the convention as a block of `#` comments, suitable for
//! `git config commit.template`.

use handlebars::Handlebars;
use serde::Serialize;

use crate::config::RulesConfig;
use crate::error::Result;

const TEMPLATE: &str = r#"# <type>(<scope>): <subject>
#
# <body>
#
# <footer>
#
# Header: at most {{max_header}} characters ({{hard_max_header}} is a hard limit).
#
# type: one of
{{#each types}}#   {{this}}
{{/each}}#
# scope: optional, names the area the change applies to, e.g. (api), (parser).
#
# subject: imperative, present tense ("change" not "changed" nor "changes"),
#   no capital first letter, no period at the end.
#
# body: separated from the header by a blank line. Explain the motivation
#   for the change and contrast it with previous behavior.
{{#if motivation}}#   Required in spirit for: {{motivation}}.
{{/if}}#
# footer: separated from the body by a blank line. Reference issues
#   ("Closes #123") and start breaking changes with "BREAKING CHANGE:".
"#;

#[derive(Serialize)]
struct TemplateContext<'a> {
    types: &'a [String],
    max_header: usize,
    hard_max_header: usize,
    motivation: String,
}

/// Render the commit template for the given rules.
pub fn render_template(rules: &RulesConfig) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_template_string("commit", TEMPLATE)?;

    let context = TemplateContext {
        types: &rules.allowed_types,
        max_header: rules.max_header_length,
        hard_max_header: rules.hard_max_header_length.max(rules.max_header_length),
        motivation: rules.motivation_types.join(", "),
    };

    Ok(handlebars.render("commit", &context)?)
}
