//! Template engine for module files using Handlebars.
//!
//! # Examples
//!
//! ```
//! use sdkgen_codegen::template_engine::{MODULE_TEMPLATE, TemplateEngine};
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new()?;
//! let text = engine.render(MODULE_TEMPLATE, &json!({
//!     "module_name": "api.functional",
//!     "import_prefix": "./../",
//!     "encryptor": "AesPkcs5",
//!     "fetcher": "Fetcher",
//!     "primitive": "Primitive",
//!     "connection_type": "IConnection",
//!     "sections": "export * as sales from \"./sales\";",
//! }))?;
//! assert!(text.contains("\nexport * as sales from \"./sales\";\n"));
//! # Ok::<(), sdkgen_core::Error>(())
//! ```

use handlebars::Handlebars;
use sdkgen_core::{Error, Result};
use serde::Serialize;

/// Name of the module file template.
pub const MODULE_TEMPLATE: &str = "sdk/module";

/// Template engine for code generation.
///
/// Wraps Handlebars in strict mode with HTML escaping disabled: rendered
/// values are TypeScript source, not markup.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if a built-in template fails to
    /// parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars
            .register_template_string(MODULE_TEMPLATE, include_str!("../templates/module.ts.hbs"))
            .map_err(|e| Error::SerializationError {
                message: format!("Failed to register module template: {e}"),
                source: None,
            })?;

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable referenced by the template is missing
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::SerializationError {
                message: format!("Template rendering failed: {e}"),
                source: None,
            })
    }
}
