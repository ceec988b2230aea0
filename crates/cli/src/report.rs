//! Diagnostics report printed after the greeting.
//!
//! Responsibilities:
//! - Collect the greeting, runtime version and working directory.
//! - Render them as exactly three lines in a fixed order.
//!
//! Invariants:
//! - Collecting never fails; an unresolvable working directory is reported
//!   as `<unavailable>` and logged.

use greeter_config::AppConfig;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::greet::greet;

/// Placeholder shown when the working directory cannot be resolved.
pub const UNAVAILABLE: &str = "<unavailable>";

/// Program name shown in the runtime version line.
pub const PROGRAM_NAME: &str = "greeter";

/// Label of the runtime version line.
pub const RUNTIME_VERSION_LABEL: &str = "Runtime version:";

/// Label of the working directory line.
pub const WORKING_DIRECTORY_LABEL: &str = "Working directory:";

/// Everything the greeter prints, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub greeting: String,
    pub runtime_version: String,
    pub working_dir: String,
}

impl Diagnostics {
    /// Collect diagnostics for the given configuration.
    pub fn collect(config: &AppConfig) -> Self {
        Self {
            greeting: greet(&config.app_name),
            runtime_version: runtime_version(),
            working_dir: working_dir_from(std::env::current_dir()),
        }
    }

    /// Write the three report lines to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.greeting)?;
        writeln!(out, "{} {}", RUNTIME_VERSION_LABEL, self.runtime_version)?;
        writeln!(out, "{} {}", WORKING_DIRECTORY_LABEL, self.working_dir)?;
        out.flush()
    }
}

/// Version of the running program and the platform it was built for.
pub fn runtime_version() -> String {
    format!(
        "{} {} ({}-{})",
        PROGRAM_NAME,
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Render a working directory lookup, falling back to [`UNAVAILABLE`] on error.
pub fn working_dir_from(result: io::Result<PathBuf>) -> String {
    match result {
        Ok(path) => path.display().to_string(),
        Err(e) => {
            tracing::warn!("Failed to resolve working directory: {}", e);
            UNAVAILABLE.to_string()
        }
    }
}
