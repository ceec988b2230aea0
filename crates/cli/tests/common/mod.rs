//! Shared test utilities for greeter integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `APP_NAME` from the host never leaks into a test run.

use assert_cmd::Command;

/// Returns a hermetic `greeter` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `APP_NAME` and `RUST_LOG` are cleared so host settings don't leak in.
pub fn greeter_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("greeter");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("APP_NAME").env_remove("RUST_LOG");

    cmd
}

/// Returns a `greeter` command that runs in `dir` with dotenv loading enabled.
#[allow(dead_code)]
pub fn greeter_cmd_in(dir: &std::path::Path) -> Command {
    let mut cmd = greeter_cmd();
    cmd.current_dir(dir);
    cmd.env_remove("DOTENV_DISABLED");
    cmd
}
