//! Core types, configuration, and errors for sdkgen.
//!
//! This crate provides the foundational types shared by the code generator
//! and the command-line driver.
//!
//! # Architecture
//!
//! The core consists of:
//! - Route descriptors (`Route`, `Parameter`, `Output`, documentation parts)
//! - Module paths used to group routes into output files
//! - Generator configuration
//! - Error hierarchy with contextual information
//! - CLI output format and exit codes

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod route;
mod types;

pub mod cli;
pub mod config;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use route::{
    DisplayPart, HttpMethod, Output, Parameter, ParameterCategory, PartKind, Route, RouteBuilder,
    Tag, parse_routes,
};
pub use types::ModulePath;
