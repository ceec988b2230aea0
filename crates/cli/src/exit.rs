//! CLI exit codes.
//!
//! Invariants:
//! - Every run of the greeter ends with `ExitCode::Success`; failures along the
//!   way are logged, never surfaced as a status.

/// Exit codes for the greeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the report was produced.
    Success = 0,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
