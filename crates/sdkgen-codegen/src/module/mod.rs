//! Module assembly.
//!
//! Routes are grouped by the literal segments of their path templates. Each
//! group becomes `functional/<segments>/index.ts`: a header importing the
//! runtime helpers, re-exports of child modules, the route units and a
//! footer referencing the helpers.

pub mod generator;
pub mod types;

pub use generator::SdkGenerator;
pub use types::{ModuleContext, ModuleUnit};
