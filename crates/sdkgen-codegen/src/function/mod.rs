//! Route-to-source generation.
//!
//! One [`Route`] becomes one TypeScript unit made of three sections:
//!
//! 1. documentation comment and `export function` signature,
//! 2. the body delegating to the fetch helper,
//! 3. the companion `export namespace` holding type aliases, metadata
//!    constants and the path builder.
//!
//! Each section is rendered independently from a shared [`RouteContext`]
//! and the non-empty results are joined with a blank line.
//!
//! # Examples
//!
//! ```
//! use sdkgen_codegen::FunctionGenerator;
//! use sdkgen_core::{HttpMethod, Parameter, Route};
//!
//! let route = Route::builder("at", HttpMethod::Get, "/sales/:id")
//!     .symbol("SalesController.at()")
//!     .parameter(Parameter::path("id", "id", "number"))
//!     .output("ISale")
//!     .build();
//!
//! let generator = FunctionGenerator::default();
//! let unit = generator.generate(&route)?;
//!
//! assert!(unit.contains("export function at"));
//! assert!(unit.contains("export namespace at"));
//! assert!(unit.contains("return `/sales/${id}`;"));
//! # Ok::<(), sdkgen_core::Error>(())
//! ```

mod body;
mod companion;
mod signature;

use crate::classifier::ParameterGroups;
use crate::common::typescript::is_reserved_word;
use crate::path::render_path_literal;
use sdkgen_core::config::is_identifier;
use sdkgen_core::{Error, GeneratorConfig, Result, Route};
use std::collections::HashSet;

/// Name of the connection handle every generated function takes first.
pub const CONNECTION_PARAMETER: &str = "connection";

/// Separator between the sections of one unit.
pub const SECTION_SEPARATOR: &str = "\n\n";

type Renderer = fn(&RouteContext<'_>) -> String;
type Applicable = fn(&RouteContext<'_>) -> bool;

const fn always(_: &RouteContext<'_>) -> bool {
    true
}

/// Sections of a unit in output order, each with its applicability check.
const SECTIONS: [(Renderer, Applicable); 3] = [
    (signature::render, always),
    (body::render, always),
    (companion::render, always),
];

/// Everything the section renderers read, computed once per route.
#[derive(Debug, Clone)]
pub struct RouteContext<'a> {
    /// Route being rendered
    pub route: &'a Route,
    /// Parameters grouped by role
    pub groups: ParameterGroups<'a>,
    /// Template literal returned by the path builder
    pub path_literal: String,
    /// Generator configuration
    pub config: &'a GeneratorConfig,
}

impl<'a> RouteContext<'a> {
    /// Validates `route` and prepares its rendering context.
    ///
    /// # Errors
    ///
    /// Returns a contract-violation error if the route name or a parameter
    /// name is not an identifier, if a parameter name repeats or shadows the
    /// connection handle, if a role is claimed twice, or if a path-segment
    /// parameter has no unique placeholder.
    pub fn new(route: &'a Route, config: &'a GeneratorConfig) -> Result<Self> {
        validate_names(route)?;
        let groups = ParameterGroups::classify(route)?;
        let path_literal = render_path_literal(route, &groups)?;

        Ok(Self {
            route,
            groups,
            path_literal,
            config,
        })
    }
}

fn validate_names(route: &Route) -> Result<()> {
    let invalid = |reason: String| Error::InvalidRoute {
        route: route.name.clone(),
        reason,
    };

    if !is_identifier(&route.name) || is_reserved_word(&route.name) {
        return Err(invalid(format!(
            "route name '{}' is not a usable TypeScript identifier",
            route.name
        )));
    }

    let mut seen = HashSet::new();
    for param in &route.parameters {
        if !is_identifier(&param.name) || is_reserved_word(&param.name) {
            return Err(invalid(format!(
                "parameter name '{}' is not a usable TypeScript identifier",
                param.name
            )));
        }
        if param.name == CONNECTION_PARAMETER {
            return Err(invalid(format!(
                "parameter name '{CONNECTION_PARAMETER}' collides with the connection handle"
            )));
        }
        if !seen.insert(param.name.as_str()) {
            return Err(invalid(format!("parameter '{}' is declared twice", param.name)));
        }
    }

    Ok(())
}

/// Generates the TypeScript unit of a single route.
#[derive(Debug, Clone, Default)]
pub struct FunctionGenerator {
    config: GeneratorConfig,
}

impl FunctionGenerator {
    /// Creates a generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the unit for `route`.
    ///
    /// Output is a pure function of the route and configuration: the same
    /// input always yields byte-identical text.
    ///
    /// # Errors
    ///
    /// Returns a contract-violation error if the route descriptor is
    /// malformed (see [`RouteContext::new`]). No partial text is returned.
    pub fn generate(&self, route: &Route) -> Result<String> {
        let ctx = RouteContext::new(route, &self.config)?;

        let unit = SECTIONS
            .iter()
            .filter(|(_, applicable)| applicable(&ctx))
            .map(|(render, _)| render(&ctx))
            .filter(|section| !section.is_empty())
            .collect::<Vec<_>>()
            .join(SECTION_SEPARATOR);

        tracing::debug!(
            route = %route.name,
            method = %route.method,
            path = %route.path,
            "Generated route unit ({} bytes)",
            unit.len()
        );

        Ok(unit)
    }
}
