//! Code shared by the route and module generators.

pub mod types;
pub mod typescript;

pub use types::{GeneratedCode, GeneratedFile};
