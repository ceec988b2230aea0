//! Greeter - print a greeting and runtime diagnostics.
//!
//! Responsibilities:
//! - Load `.env` into the process environment and resolve `AppConfig`.
//! - Initialize stderr logging.
//! - Run the orchestration routine against stdout.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can supply `RUST_LOG`.
//! - Dotenv problems are logged once logging is up and never change the exit code.
//! - Extra command-line arguments are ignored; the run is always the same.
//! - Stdout carries only the three report lines; logs go to stderr.

mod args;

use args::Cli;
use clap::Parser;
use greeter_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env before anything reads the environment; report problems after logging is up
    let (loader, dotenv_error) = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => (loader, None),
        Err(e) => (ConfigLoader::new(), Some(e)),
    };

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = dotenv_error {
        tracing::warn!("{}", e);
    }
    for warning in loader.dotenv_warnings() {
        tracing::warn!("{}", warning);
    }
    if !cli.ignored.is_empty() {
        tracing::debug!(count = cli.ignored.len(), "ignoring extra arguments");
    }

    let config = loader.from_env().build();

    let stdout = std::io::stdout();
    let exit_code = greeter_cli::run(&config, &mut stdout.lock());

    std::process::exit(exit_code.as_i32());
}
