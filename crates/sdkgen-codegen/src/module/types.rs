//! Types used by the module assembler.

use sdkgen_core::{ModulePath, Route};
use serde::Serialize;
use std::collections::BTreeSet;

/// Routes and child modules that share one module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleUnit {
    /// Module the file belongs to
    pub module: ModulePath,
    /// Routes in input order
    pub routes: Vec<Route>,
    /// Directory names of direct child modules
    pub children: BTreeSet<String>,
}

impl ModuleUnit {
    /// Creates an empty unit for `module`.
    #[must_use]
    pub const fn new(module: ModulePath) -> Self {
        Self {
            module,
            routes: Vec::new(),
            children: BTreeSet::new(),
        }
    }
}

/// Context for the module file template.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleContext {
    /// Dotted module name for `@module`
    pub module_name: String,
    /// Relative prefix from the module file to the API root
    pub import_prefix: String,
    /// Encryption helper name
    pub encryptor: String,
    /// Fetch helper name
    pub fetcher: String,
    /// Primitive projection type name
    pub primitive: String,
    /// Connection handle type name
    pub connection_type: String,
    /// Re-exports and route units, already joined
    pub sections: String,
}
