// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example configuration file.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cml configuration file
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

[rules]
# Recognized commit types
allowed_types = ["feat", "fix", "docs", "style", "refactor", "test", "chore"]

# Headers longer than this get a warning...
max_header_length = 50
# ...and longer than this an error
hard_max_header_length = 72

# Types that should explain the change in a body or footer
motivation_types = ["feat", "fix"]

# Verb roots checked by the imperative mood heuristic
imperative_verbs = [
    "add", "fix", "update", "remove", "change", "implement", "create",
    "delete", "rename", "move", "bump", "improve", "refactor", "replace",
    "introduce", "support", "handle", "allow", "use", "merge", "revert",
    "clean", "document", "upgrade", "enable", "disable",
]

# Rules to skip, by name (see `cml rules`)
disabled = []

[input]
# Drop lines starting with '#' (and everything below git's scissors line)
# before checking. Leading blank lines are always dropped.
strip_comments = true

[output]
# Fail on warnings too
strict = false
color = true
# Suggest fixes below each diagnostic (terminal output only)
hints = true
"#
}
