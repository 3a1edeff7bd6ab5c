// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for message cleanup, parsing and the message template.

mod cleanup;
mod message;
mod template;

pub use cleanup::{clean_message, CleanMessage};
pub use message::ParsedMessage;
pub use template::render_template;
