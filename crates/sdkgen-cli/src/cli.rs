//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::GenerateOptions;

/// sdkgen - TypeScript client generation from route descriptors.
///
/// Reads normalized route descriptors (JSON) and writes one TypeScript
/// module per path group, each function delegating to a fetch helper.
#[derive(Parser, Debug)]
#[command(name = "sdkgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the SDK from route descriptors.
    ///
    /// Inputs are JSON files or directories walked for `*.json`. Settings
    /// are read from `sdkgen.toml` when present.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # From arguments only
    /// sdkgen generate routes/ --out src/api
    ///
    /// # From sdkgen.toml, previewing the file list
    /// sdkgen generate --dry-run
    /// ```
    Generate(GenerateArgs),

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of the `generate` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Route descriptor files or directories
    pub inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Route-path prefix to skip (repeatable)
    #[arg(short, long = "exclude", num_args = 1)]
    pub exclude: Vec<String>,

    /// Configuration file (default: ./sdkgen.toml when present)
    #[arg(short, long, env = "SDKGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl From<GenerateArgs> for GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        Self {
            inputs: args.inputs,
            out: args.out,
            exclude: args.exclude,
            config: args.config,
            dry_run: args.dry_run,
        }
    }
}
