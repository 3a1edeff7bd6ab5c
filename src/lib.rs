// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cml - Commit message linter
//!
//! Validates commit messages against the `type(scope): subject` convention
//! with an optional body and footer.
//!
//! # Pipeline
//!
//! - **Parser**: splits raw text into header, body and footer, never failing
//! - **Rule Engine**: runs an ordered table of rules and collects every violation
//! - **Reporter**: turns violations into diagnostics and an exit code
//!
//! # Example
//!
//! ```
//! use cml::commit::ParsedMessage;
//! use cml::report::report;
//! use cml::rules::{evaluate, RuleSet};
//!
//! let rules = RuleSet::default();
//! let message = ParsedMessage::parse("feat(api): add retry support");
//! let violations = evaluate(&message, &rules);
//!
//! let outcome = report(&violations);
//! assert_eq!(outcome.exit_code, 0);
//! assert_eq!(
//!     outcome.text,
//!     "warning: missing-motivation: 'feat' commits should explain the change in a body or footer"
//! );
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use config::CmlConfig;
pub use error::{CmlError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cml.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, short_sha(sha), date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, short_sha(sha))
            }
            _ => VERSION.to_string(),
        }
    }

    fn short_sha(sha: &str) -> &str {
        sha.get(..7).unwrap_or(sha)
    }
}
