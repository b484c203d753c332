//! Error types for sdkgen.
//!
//! Every crate in the workspace reports failures through [`Error`]. Route
//! contract violations carry the offending route and parameter so that a
//! malformed descriptor can be traced back to its controller.
//!
//! # Examples
//!
//! ```
//! use sdkgen_core::{Error, Result};
//!
//! fn require_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::InvalidRoute {
//!             route: "<unnamed>".to_string(),
//!             reason: "route name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_name("").unwrap_err();
//! assert!(err.is_contract_violation());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sdkgen.
#[derive(Error, Debug)]
pub enum Error {
    /// The route descriptor is structurally invalid.
    ///
    /// Raised for descriptor problems that are not tied to a single
    /// parameter, such as an empty route name.
    #[error("Invalid route '{route}': {reason}")]
    InvalidRoute {
        /// Name of the offending route
        route: String,
        /// Description of the problem
        reason: String,
    },

    /// A path-segment parameter has no matching placeholder.
    ///
    /// Every path-segment parameter must name a `:field` placeholder that
    /// occurs exactly once in the route's path template.
    #[error("Route '{route}': parameter '{parameter}' has no unique placeholder ':{field}' in its path")]
    MissingPlaceholder {
        /// Name of the offending route
        route: String,
        /// Call-site name of the parameter
        parameter: String,
        /// Placeholder name the parameter claims
        field: String,
    },

    /// More than one parameter claims the query or payload role.
    #[error("Route '{route}': parameter '{parameter}' is a second {role} parameter")]
    DuplicateRole {
        /// Name of the offending route
        route: String,
        /// Role claimed twice ("query" or "payload")
        role: String,
        /// Call-site name of the second parameter
        parameter: String,
    },

    /// Two routes of one module share a callable name.
    #[error("Module '{module}' defines route '{name}' more than once")]
    DuplicateRoute {
        /// Module path, e.g. `/sellers/sales`
        module: String,
        /// Duplicated callable name
        name: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or contains contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Serialization/deserialization or template rendering error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Filesystem access failed.
    #[error("I/O error on '{}': {source}", path.display())]
    IoError {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if the error reports a broken route descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_core::Error;
    ///
    /// let err = Error::DuplicateRole {
    ///     route: "index".to_string(),
    ///     role: "query".to_string(),
    ///     parameter: "filter".to_string(),
    /// };
    /// assert!(err.is_contract_violation());
    /// ```
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRoute { .. }
                | Self::MissingPlaceholder { .. }
                | Self::DuplicateRole { .. }
                | Self::DuplicateRoute { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "output path is not specified".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::SerializationError {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

/// Result type alias for sdkgen operations.
///
/// # Examples
///
/// ```
/// use sdkgen_core::{Error, Result};
///
/// fn parse_depth(value: i32) -> Result<usize> {
///     usize::try_from(value).map_err(|_| Error::InvalidArgument(format!("negative depth {value}")))
/// }
///
/// assert!(parse_depth(3).is_ok());
/// assert!(parse_depth(-1).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_detection() {
        let err = Error::MissingPlaceholder {
            route: "store".to_string(),
            parameter: "saleId".to_string(),
            field: "saleId".to_string(),
        };
        assert!(err.is_contract_violation());
        assert!(!err.is_config_error());

        let err = Error::DuplicateRoute {
            module: "/sellers".to_string(),
            name: "index".to_string(),
        };
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_config_error_detection() {
        let err = Error::ConfigError {
            message: "Invalid configuration".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_missing_placeholder_display() {
        let err = Error::MissingPlaceholder {
            route: "store".to_string(),
            parameter: "articleId".to_string(),
            field: "article".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("store"));
        assert!(display.contains("articleId"));
        assert!(display.contains(":article"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);
        assert!(err.is_serialization_error());
    }

    #[test]
    fn test_io_error_display() {
        let err = Error::IoError {
            path: PathBuf::from("routes.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_io_error());
        assert!(format!("{err}").contains("routes.json"));
    }
}
