//! Command execution and logging initialization.

use anyhow::Result;
use sdkgen_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::commands;

/// Initializes logging infrastructure.
///
/// `--verbose` forces the `debug` level; otherwise `RUST_LOG` applies,
/// defaulting to `info`. Logs go to stderr so stdout carries only output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// Library errors are logged and mapped to their exit code; other failures
/// propagate.
///
/// # Errors
///
/// Returns an error if command execution fails for a reason other than a
/// library error.
pub async fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    let result = match command {
        Commands::Generate(args) => commands::generate::run(args.into(), output_format).await,
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    };

    match result {
        Err(err) => match err.downcast_ref::<sdkgen_core::Error>() {
            Some(library_error) => {
                tracing::error!("{err:#}");
                Ok(ExitCode::for_error(library_error))
            }
            None => Err(err),
        },
        ok => ok,
    }
}
