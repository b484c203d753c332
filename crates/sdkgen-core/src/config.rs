//! Generator configuration.
//!
//! [`GeneratorConfig`] holds the fixed texts and helper names the generator
//! writes into every unit: the documentation of the injected `connection`
//! parameter, the attribution line, and the names of the opaque runtime
//! helpers the generated code imports. The defaults reproduce the reference
//! SDK layout.
//!
//! # Examples
//!
//! ```
//! use sdkgen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.fetcher, "Fetcher");
//!
//! let custom = GeneratorConfig::builder()
//!     .attribution("@generated by my-tool")
//!     .build();
//! assert_eq!(custom.attribution, "@generated by my-tool");
//! assert!(custom.validate().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default description of the injected `connection` parameter.
pub const DEFAULT_CONNECTION_DESCRIPTION: &str =
    "connection Information of the remote HTTP(s) server with headers (+encryption password)";

/// Default attribution line written above the `@controller` trailer.
pub const DEFAULT_ATTRIBUTION: &str = "@sdkgen Generated by sdkgen";

/// Configuration of the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Text of the synthesized `@param connection` tag, after the name.
    pub connection_description: String,

    /// Attribution line of the documentation trailer.
    pub attribution: String,

    /// Name of the imported request-dispatch helper.
    pub fetcher: String,

    /// Name of the imported payload encryption helper.
    pub encryptor: String,

    /// Name of the imported primitive-projection type.
    pub primitive: String,

    /// Name of the imported connection-handle type.
    pub connection_type: String,

    /// Dotted prefix of the `@module` header (e.g. `api.functional`).
    pub module_prefix: String,

    /// Directory, relative to the output root, that holds module files.
    pub functional_dir: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            connection_description: DEFAULT_CONNECTION_DESCRIPTION.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            fetcher: "Fetcher".to_string(),
            encryptor: "AesPkcs5".to_string(),
            primitive: "Primitive".to_string(),
            connection_type: "IConnection".to_string(),
            module_prefix: "api.functional".to_string(),
            functional_dir: "functional".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// Helper names end up as TypeScript identifiers and the attribution
    /// and description end up on a single documentation line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - a helper name is not a plain identifier
    /// - the attribution or connection description spans several lines
    /// - the functional directory is empty or absolute
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_core::GeneratorConfig;
    ///
    /// let mut config = GeneratorConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.fetcher = "my fetcher".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("fetcher", &self.fetcher),
            ("encryptor", &self.encryptor),
            ("primitive", &self.primitive),
            ("connection_type", &self.connection_type),
        ] {
            if !is_identifier(value) {
                return Err(Error::ConfigError {
                    message: format!("{field} must be a TypeScript identifier, got '{value}'"),
                });
            }
        }

        for (field, value) in [
            ("attribution", &self.attribution),
            ("connection_description", &self.connection_description),
        ] {
            if value.contains(['\n', '\r']) {
                return Err(Error::ConfigError {
                    message: format!("{field} must fit on one line"),
                });
            }
        }

        if self.functional_dir.is_empty() || self.functional_dir.starts_with('/') {
            return Err(Error::ConfigError {
                message: format!(
                    "functional_dir must be a relative directory, got '{}'",
                    self.functional_dir
                ),
            });
        }

        Ok(())
    }
}

/// Returns `true` if `value` is a plain ASCII TypeScript identifier.
///
/// # Examples
///
/// ```
/// use sdkgen_core::config::is_identifier;
///
/// assert!(is_identifier("Fetcher"));
/// assert!(is_identifier("$connection"));
/// assert!(!is_identifier("2fast"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a builder seeded with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `@param connection` description.
    #[must_use]
    pub fn connection_description(mut self, text: impl Into<String>) -> Self {
        self.config.connection_description = text.into();
        self
    }

    /// Sets the attribution line.
    #[must_use]
    pub fn attribution(mut self, text: impl Into<String>) -> Self {
        self.config.attribution = text.into();
        self
    }

    /// Sets the request-dispatch helper name.
    #[must_use]
    pub fn fetcher(mut self, name: impl Into<String>) -> Self {
        self.config.fetcher = name.into();
        self
    }

    /// Sets the primitive-projection type name.
    #[must_use]
    pub fn primitive(mut self, name: impl Into<String>) -> Self {
        self.config.primitive = name.into();
        self
    }

    /// Sets the dotted module prefix.
    #[must_use]
    pub fn module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.module_prefix = prefix.into();
        self
    }

    /// Builds the configuration without validating it.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}
