//! notify - desktop notifications from the command line
//!
//! Three stages, run once per invocation:
//! - parse flags into a typed option set (`cli`, `options`)
//! - resolve the message: flags on an interactive terminal, piped stdin
//!   otherwise, with an optional failsafe timer (`input`)
//! - hand the result to the platform notifier (`notify`)
//!
//! The exit status is decided here and nowhere else: 0 for a delivered
//! notification or an empty-message no-op, 1 when the notifier fails.

mod cli;
mod config;
mod errors;
mod input;
mod notify;
mod options;

use clap::Parser;
use cli::Cli;
use config::NotifyConfig;
use errors::Result;
use notify::Outcome;
use options::NotifyOptions;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_from(cli::recognized_args(std::env::args()));

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return ExitCode::SUCCESS;
    }

    init_tracing();

    match run(cli).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Wire the three stages together
async fn run(cli: Cli) -> Result<Outcome> {
    let config = NotifyConfig::load();
    let failsafe = cli.failsafe.map(Duration::from_millis);
    if let Some(delay) = failsafe {
        tracing::debug!(?delay, "failsafe timer armed");
    }

    let options = NotifyOptions::from_cli(&cli, &config);
    let options = input::resolve(options, failsafe).await?;
    notify::dispatch(options).await
}

/// Initialize logging to stderr, gated by RUST_LOG
///
/// Off when RUST_LOG is unset: stderr carries only the notifier error text.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();
}
