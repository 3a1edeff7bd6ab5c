// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cml.
//!
//! This module handles loading and parsing configuration from cml.toml,
//! falling back to built-in defaults.

pub mod default;
mod loader;
mod schema;

pub use default::example_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
