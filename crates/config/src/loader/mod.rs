//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load `.env` key/value pairs into the process environment.
//! - Provide a builder-pattern `ConfigLoader` that resolves an `AppConfig`.
//! - Enforce the `DOTENV_DISABLED` gate so tests never pick up a stray `.env`.
//!
//! Does NOT handle:
//! - Printing anything; callers decide how to report a dotenv failure.
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - Variables already in the process environment are never overridden by `.env`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::app_name_from_env;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
