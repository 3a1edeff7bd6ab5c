// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Message sources for the check command.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{InputError, Result};

use super::args::CheckArgs;

/// Where a commit message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input.
    Stdin,
    /// A message file, such as the one a commit-msg hook receives.
    File(PathBuf),
    /// Message text given on the command line.
    Literal(String),
}

impl Input {
    /// Collect the inputs named by the check arguments.
    pub fn from_args(args: &CheckArgs) -> Vec<Input> {
        if let Some(ref message) = args.message {
            return vec![Input::Literal(message.clone())];
        }

        if args.files.is_empty() {
            return vec![Input::Stdin];
        }

        args.files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::File(path.clone())
                }
            })
            .collect()
    }

    /// Display name used in reports.
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Literal(_) => "<message>".to_string(),
        }
    }

    /// Read the raw message text.
    pub fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|e| self.read_failed(e))?;
                self.decode(bytes)
            }
            Input::File(path) => {
                let bytes = read_file(path).map_err(|e| self.read_failed(e))?;
                self.decode(bytes)
            }
            Input::Literal(text) => Ok(text.clone()),
        }
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 { path: self.name() }.into())
    }

    fn read_failed(&self, err: std::io::Error) -> InputError {
        InputError::ReadFailed {
            path: self.name(),
            message: err.to_string(),
        }
    }
}

fn read_file(path: &Path) -> std::io::Result<Vec<u8>> {
    tracing::debug!("Reading commit message from: {:?}", path);
    std::fs::read(path)
}
