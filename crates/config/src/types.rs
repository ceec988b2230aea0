//! Resolved configuration types.

/// Configuration handed to the greeter once loading is finished.
///
/// Built by [`crate::ConfigLoader::build`]; the orchestration routine reads
/// from this instead of the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Subject of the greeting. May be empty if `APP_NAME` was set to "".
    pub app_name: String,
}

impl AppConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}
