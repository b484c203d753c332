//! sdkgen CLI library.
//!
//! Exposes the argument definitions, configuration loading, commands and
//! formatters so they can be tested without spawning the binary.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::{GenerateOptions, ResolvedConfig, SdkConfig};
