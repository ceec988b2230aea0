//! Error types for configuration loading.
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while loading the `.env` file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `.env` file has invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, never the line itself.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl From<dotenvy::Error> for ConfigError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }
}
