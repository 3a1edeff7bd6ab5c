// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module provides a data-driven rule table and the engine that runs
//! it against parsed commit messages.

mod builtin;
mod engine;
mod violation;

pub use builtin::{builtin_rules, CheckFn, Rule};
pub use engine::{evaluate, RuleEngine, RuleSet};
pub use violation::{Severity, Violation};
