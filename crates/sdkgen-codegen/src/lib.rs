//! TypeScript client generation for route descriptors.
//!
//! Transforms normalized [`Route`](sdkgen_core::Route) descriptors into
//! TypeScript source: one function plus companion namespace per route, and
//! one `index.ts` module file per path group.
//!
//! # Architecture
//!
//! - [`classifier`]: splits parameters into query, payload and call order
//! - [`path`]: placeholder binding and the path-builder template literal
//! - [`function`]: per-route documentation, signature, body and companion
//! - [`module`]: grouping of route units into module files via Handlebars
//!
//! # Examples
//!
//! ```
//! use sdkgen_codegen::SdkGenerator;
//! use sdkgen_core::parse_routes;
//!
//! let routes = parse_routes(r#"[
//!     {"name": "index", "method": "GET", "path": "/sales", "symbol": "SalesController.index()"}
//! ]"#)?;
//!
//! let code = SdkGenerator::new()?.generate(&routes)?;
//! let sales = code.find("functional/sales/index.ts").expect("module file");
//! assert!(sales.content().contains("export function index"));
//! # Ok::<(), sdkgen_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod classifier;
pub mod common;
pub mod function;
pub mod module;
pub mod path;
pub mod template_engine;

pub use common::types::{GeneratedCode, GeneratedFile};
pub use function::{FunctionGenerator, RouteContext};
pub use module::{ModuleUnit, SdkGenerator};
pub use template_engine::TemplateEngine;
