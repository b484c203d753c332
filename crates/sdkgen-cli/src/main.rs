//! sdkgen command-line entry point.
//!
//! # Examples
//!
//! ```bash
//! # Generate from a directory of route descriptors
//! sdkgen generate routes/ --out src/api
//!
//! # Use sdkgen.toml and print a JSON summary
//! sdkgen --format json generate
//! ```

use anyhow::Result;
use clap::Parser;
use sdkgen_cli::cli::Cli;
use sdkgen_cli::runner::{execute_command, init_logging};
use sdkgen_core::cli::OutputFormat;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(cli.command, output_format).await?;

    std::process::exit(exit_code.as_i32());
}
