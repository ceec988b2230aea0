//! Configuration loader builder implementation.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - The `DOTENV_DISABLED` variable is checked before the `.env` file is searched for.
//! - A malformed `.env` line is skipped and recorded; later lines still load.

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_APP_NAME, DOTENV_DISABLED_ENV};
use crate::types::AppConfig;

/// Configuration loader that builds an [`AppConfig`] from `.env` and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    app_name: Option<String>,
    dotenv_warnings: Vec<ConfigError>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// The file is searched for in the current directory and its parents.
    /// Variables already present in the process environment keep their values.
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// Lines that fail to parse are skipped and recorded in
    /// [`dotenv_warnings`](Self::dotenv_warnings); every other line is still loaded.
    /// A read failure partway through stops loading and is recorded the same way.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvIo` if the file exists but cannot be opened.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn load_dotenv(mut self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("dotenv loading disabled via {}", DOTENV_DISABLED_ENV);
            return Ok(self);
        }

        let entries = match dotenvy::dotenv_iter() {
            Ok(entries) => entries,
            Err(e) if Self::is_not_found(&e) => {
                tracing::debug!("no .env file found");
                return Ok(self);
            }
            Err(e) => return Err(e.into()),
        };

        let mut loaded = 0usize;
        for entry in entries {
            match entry {
                Ok((key, value)) => {
                    if std::env::var_os(&key).is_none() {
                        // SAFETY: dotenv loading runs at startup before any threads are spawned.
                        unsafe {
                            std::env::set_var(&key, value);
                        }
                        loaded += 1;
                    }
                }
                Err(e @ dotenvy::Error::LineParse(..)) => self.dotenv_warnings.push(e.into()),
                Err(e) => {
                    self.dotenv_warnings.push(e.into());
                    break;
                }
            }
        }

        tracing::debug!(
            loaded,
            skipped = self.dotenv_warnings.len(),
            "loaded .env file"
        );
        Ok(self)
    }

    /// Problems found while loading `.env`, in file order.
    pub fn dotenv_warnings(&self) -> &[ConfigError] {
        &self.dotenv_warnings
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    ///
    /// Values set through builder methods are kept.
    pub fn from_env(mut self) -> Self {
        if self.app_name.is_none() {
            apply_env(&mut self);
        }
        self
    }

    /// Set the greeting subject explicitly.
    pub fn with_app_name(mut self, name: String) -> Self {
        self.app_name = Some(name);
        self
    }

    pub(super) fn set_app_name(&mut self, name: Option<String>) {
        self.app_name = name;
    }

    /// Get the greeting subject resolved so far, if any.
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    /// Build the final configuration, falling back to defaults for unset values.
    pub fn build(self) -> AppConfig {
        let app_name = self.app_name.unwrap_or_else(|| {
            tracing::debug!("APP_NAME not set, using default app name");
            DEFAULT_APP_NAME.to_string()
        });
        AppConfig { app_name }
    }
}
