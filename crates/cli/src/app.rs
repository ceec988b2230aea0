//! Orchestration routine: greet and report.
//!
//! Responsibilities:
//! - Turn a resolved `AppConfig` into the three-line report on the given writer.
//!
//! Does NOT handle:
//! - `.env` loading or environment lookups (done in `main` via `ConfigLoader`).
//!
//! Invariants:
//! - Always returns `ExitCode::Success`; a failed write is logged, not returned.

use greeter_config::AppConfig;
use std::io::Write;

use crate::exit::ExitCode;
use crate::report::Diagnostics;

/// Greet the configured name and print runtime diagnostics to `out`.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> ExitCode {
    let report = Diagnostics::collect(config);
    tracing::debug!(app_name = %config.app_name, "writing report");

    if let Err(e) = report.write_to(out) {
        tracing::warn!("Failed to write report: {}", e);
    }

    ExitCode::Success
}
