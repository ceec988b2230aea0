//! Centralized constants for the greeter workspace.

/// Environment variable holding the greeting subject.
pub const APP_NAME_ENV: &str = "APP_NAME";

/// Subject used when `APP_NAME` is not set.
pub const DEFAULT_APP_NAME: &str = "Python App";

/// Setting this to `1` or `true` skips `.env` loading.
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";
