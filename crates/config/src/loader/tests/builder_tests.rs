//! Builder precedence and default tests.

use serial_test::serial;

use super::lock_env;
use crate::constants::DEFAULT_APP_NAME;
use crate::loader::builder::ConfigLoader;
use crate::types::AppConfig;

#[test]
fn test_build_without_sources_uses_default() {
    let config = ConfigLoader::new().build();
    assert_eq!(config, AppConfig::new(DEFAULT_APP_NAME));
    assert_eq!(config.app_name, "Python App");
}

#[test]
fn test_with_app_name_is_used() {
    let config = ConfigLoader::new()
        .with_app_name("Builder App".to_string())
        .build();
    assert_eq!(config.app_name, "Builder App");
}

#[test]
#[serial]
fn test_builder_override_beats_env() {
    let _lock = lock_env();

    temp_env::with_var("APP_NAME", Some("Env App"), || {
        let loader = ConfigLoader::new()
            .with_app_name("Builder App".to_string())
            .from_env();

        assert_eq!(loader.app_name(), Some("Builder App"));
        assert_eq!(loader.build().app_name, "Builder App");
    });
}

#[test]
fn test_default_loader_has_no_app_name() {
    assert_eq!(ConfigLoader::default().app_name(), None);
}
