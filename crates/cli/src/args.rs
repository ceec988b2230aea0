//! CLI argument definitions.
//!
//! The greeter takes no operational arguments; clap supplies `--help` and
//! `--version`, and anything else is collected and ignored.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(
    about = "Print a greeting and runtime diagnostics",
    long_about = "Print a greeting and runtime diagnostics.\n\n\
                  The greeting subject comes from APP_NAME (also read from a .env file \
                  in the working directory or its parents) and defaults to \"Python App\"."
)]
#[command(version)]
#[command(
    after_help = "Environment:\n  APP_NAME         Greeting subject\n  DOTENV_DISABLED  Set to 1 or true to skip .env loading\n  RUST_LOG         Log filter for stderr output (default: warn)\n"
)]
pub struct Cli {
    /// Extra arguments; accepted and ignored.
    #[arg(
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "ARGS"
    )]
    pub ignored: Vec<String>,
}
