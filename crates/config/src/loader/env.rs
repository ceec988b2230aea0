//! Environment variable lookups for configuration.
//!
//! Invariants:
//! - A variable that is set but empty counts as set; the value is used as-is.
//! - Non-UTF-8 values are converted lossily rather than rejected.

use super::builder::ConfigLoader;
use crate::constants::APP_NAME_ENV;

/// Read `APP_NAME`, returning None only when it is unset.
pub fn app_name_from_env() -> Option<String> {
    std::env::var_os(APP_NAME_ENV).map(|value| value.to_string_lossy().into_owned())
}

/// Apply environment variable configuration to the loader.
pub(super) fn apply_env(loader: &mut ConfigLoader) {
    if let Some(name) = app_name_from_env() {
        tracing::debug!(var = APP_NAME_ENV, "using app name from environment");
        loader.set_app_name(Some(name));
    }
}
