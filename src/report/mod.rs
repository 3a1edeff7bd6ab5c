// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Violation reporting.
//!
//! Turns the violations of one run into an exit code and diagnostic text.
//! Printing is left to the caller.

mod reporter;

pub use reporter::{report, Report, Reporter, SUCCESS_LINE};
