// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cml.toml.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The main configuration structure for cml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CmlConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// How raw message text is prepared before parsing.
    pub input: InputConfig,

    /// Report output configuration.
    pub output: OutputConfig,
}

impl CmlConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Reject values the rule engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.rules.max_header_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rules.max_header_length".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }

        if self.rules.allowed_types.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "rules.allowed_types".to_string(),
                message: "at least one type must be allowed".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Recognized commit types.
    pub allowed_types: Vec<String>,

    /// Header length above which a warning is raised.
    pub max_header_length: usize,

    /// Header length above which the warning becomes an error.
    pub hard_max_header_length: usize,

    /// Types that must explain themselves with a body or footer.
    pub motivation_types: Vec<String>,

    /// Verb roots checked by the imperative mood heuristic.
    pub imperative_verbs: Vec<String>,

    /// Rule names to skip.
    pub disabled: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            max_header_length: 50,
            hard_max_header_length: 72,
            motivation_types: vec!["feat".to_string(), "fix".to_string()],
            imperative_verbs: DEFAULT_VERBS.iter().map(|v| v.to_string()).collect(),
            disabled: Vec::new(),
        }
    }
}

/// Commit types recognized out of the box.
pub const DEFAULT_TYPES: &[&str] = &["feat", "fix", "docs", "style", "refactor", "test", "chore"];

/// Verb roots commonly misused in past tense or third person.
pub const DEFAULT_VERBS: &[&str] = &[
    "add",
    "fix",
    "update",
    "remove",
    "change",
    "implement",
    "create",
    "delete",
    "rename",
    "move",
    "bump",
    "improve",
    "refactor",
    "replace",
    "introduce",
    "support",
    "handle",
    "allow",
    "use",
    "merge",
    "revert",
    "clean",
    "document",
    "upgrade",
    "enable",
    "disable",
];

/// Input preparation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Drop `#` comment lines before parsing.
    pub strip_comments: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            strip_comments: true,
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Treat warnings as failures.
    pub strict: bool,

    /// Whether to use colors.
    pub color: bool,

    /// Whether to show suggestion hints when writing to a terminal.
    pub hints: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            strict: false,
            color: true,
            hints: true,
        }
    }
}
