//! Greeter library: greeting formatting, the diagnostics report and the
//! orchestration routine the `greeter` binary runs.

pub mod app;
pub mod exit;
pub mod greet;
pub mod report;

pub use app::run;
pub use exit::ExitCode;
pub use greet::{DEFAULT_GREETING_SUBJECT, greet, greet_default};
pub use report::Diagnostics;
