//! Configuration management for the greeter.
//!
//! This crate loads the optional `.env` file into the process environment
//! and resolves the values the greeter needs into an explicit [`AppConfig`].

pub mod constants;
mod loader;
mod types;

pub use loader::{ConfigError, ConfigLoader, app_name_from_env};
pub use types::AppConfig;
