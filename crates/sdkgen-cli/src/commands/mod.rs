//! Command implementations for the sdkgen CLI.
//!
//! Each command module executes its operation and formats output according
//! to the requested format.

pub mod completions;
pub mod generate;
