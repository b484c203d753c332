//! SDK generator: route units assembled into module files.
//!
//! # Examples
//!
//! ```
//! use sdkgen_codegen::SdkGenerator;
//! use sdkgen_core::{HttpMethod, Route};
//!
//! let routes = vec![
//!     Route::builder("index", HttpMethod::Get, "/sellers/sales").build(),
//! ];
//!
//! let generator = SdkGenerator::new()?;
//! let code = generator.generate(&routes)?;
//!
//! let paths: Vec<_> = code.files().map(|f| f.path()).collect();
//! assert_eq!(
//!     paths,
//!     vec!["functional/index.ts", "functional/sellers/index.ts", "functional/sellers/sales/index.ts"]
//! );
//! # Ok::<(), sdkgen_core::Error>(())
//! ```

use crate::common::types::{GeneratedCode, GeneratedFile};
use crate::common::typescript::{export_name, string_literal};
use crate::function::{FunctionGenerator, SECTION_SEPARATOR};
use crate::module::types::{ModuleContext, ModuleUnit};
use crate::template_engine::{MODULE_TEMPLATE, TemplateEngine};
use sdkgen_core::{Error, GeneratorConfig, ModulePath, Result, Route};
use std::collections::BTreeMap;

/// Generator for the module files of an SDK.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; one instance can render modules from
/// several threads.
#[derive(Debug)]
pub struct SdkGenerator<'a> {
    engine: TemplateEngine<'a>,
    functions: FunctionGenerator,
}

impl SdkGenerator<'_> {
    /// Creates a generator with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Self::with_config(GeneratorConfig::default())
    }

    /// Creates a generator with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid, or an
    /// error if template registration fails.
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        let functions = FunctionGenerator::new(config)?;
        let engine = TemplateEngine::new()?;
        Ok(Self { engine, functions })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        self.functions.config()
    }

    /// Generates every module file for `routes`, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns the first contract violation found in any route, or
    /// [`Error::DuplicateRoute`] if two routes of one module share a name.
    pub fn generate(&self, routes: &[Route]) -> Result<GeneratedCode> {
        tracing::info!("Generating SDK for {} routes", routes.len());

        let mut code = GeneratedCode::new();
        for unit in Self::plan_modules(routes)? {
            code.add_file(self.render_module(&unit)?);
        }
        code.sort();

        tracing::info!(
            "Successfully generated {} files ({} bytes)",
            code.file_count(),
            code.total_bytes()
        );

        Ok(code)
    }

    /// Groups routes into module units, adding every ancestor module so the
    /// tree is reachable from the root.
    ///
    /// Units come back ordered by module path; routes keep input order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoute`] if a literal path segment cannot name
    /// a module directory, or [`Error::DuplicateRoute`] if two routes of one
    /// module share a name.
    pub fn plan_modules(routes: &[Route]) -> Result<Vec<ModuleUnit>> {
        let mut modules: BTreeMap<ModulePath, ModuleUnit> = BTreeMap::new();

        for route in routes {
            let module = ModulePath::from_route_path(&route.path);
            if let Some(segment) = module.invalid_segment() {
                return Err(Error::InvalidRoute {
                    route: route.name.clone(),
                    reason: format!(
                        "path segment {segment:?} of '{}' cannot name a module directory",
                        route.path
                    ),
                });
            }

            let unit = modules
                .entry(module.clone())
                .or_insert_with(|| ModuleUnit::new(module.clone()));

            if unit.routes.iter().any(|existing| existing.name == route.name) {
                return Err(Error::DuplicateRoute {
                    module: module.to_string(),
                    name: route.name.clone(),
                });
            }
            unit.routes.push(route.clone());

            let mut child = module;
            while let Some(parent) = child.parent() {
                if let Some(segment) = child.last() {
                    modules
                        .entry(parent.clone())
                        .or_insert_with(|| ModuleUnit::new(parent.clone()))
                        .children
                        .insert(segment.to_string());
                }
                child = parent;
            }
        }

        Ok(modules.into_values().collect())
    }

    /// Renders the file of one module unit.
    ///
    /// # Errors
    ///
    /// Returns error if a route is malformed, if a route name collides with a
    /// child module export, or if template rendering fails.
    pub fn render_module(&self, unit: &ModuleUnit) -> Result<GeneratedFile> {
        let config = self.config();

        let exports: Vec<(String, &str)> = unit
            .children
            .iter()
            .map(|child| (export_name(child), child.as_str()))
            .collect();

        if let Some(route) = unit
            .routes
            .iter()
            .find(|route| exports.iter().any(|(name, _)| *name == route.name))
        {
            return Err(Error::InvalidRoute {
                route: route.name.clone(),
                reason: format!("name collides with a submodule of {}", unit.module),
            });
        }

        let mut sections = Vec::with_capacity(unit.routes.len() + 1);
        if !exports.is_empty() {
            sections.push(
                exports
                    .iter()
                    .map(|(name, child)| {
                        format!("export * as {name} from {};", string_literal(&format!("./{child}")))
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        for route in &unit.routes {
            sections.push(self.functions.generate(route)?);
        }

        let context = ModuleContext {
            module_name: unit.module.dotted(&config.module_prefix),
            import_prefix: format!("./{}", "../".repeat(unit.module.depth() + 1)),
            encryptor: config.encryptor.clone(),
            fetcher: config.fetcher.clone(),
            primitive: config.primitive.clone(),
            connection_type: config.connection_type.clone(),
            sections: sections.join(SECTION_SEPARATOR),
        };
        let content = self.engine.render(MODULE_TEMPLATE, &context)?;

        let path = if unit.module.is_root() {
            format!("{}/index.ts", config.functional_dir)
        } else {
            format!("{}/{}/index.ts", config.functional_dir, unit.module.directory())
        };

        tracing::debug!(
            module = %unit.module,
            routes = unit.routes.len(),
            children = unit.children.len(),
            "Generated module file: {path}"
        );

        Ok(GeneratedFile { path, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkgen_core::{HttpMethod, Parameter};

    fn route(name: &str, path: &str) -> Route {
        Route::builder(name, HttpMethod::Get, path).build()
    }

    #[test]
    fn test_plan_adds_ancestors() {
        let routes = vec![route("index", "/sellers/:section/sales/:saleId/comments")];
        let units = SdkGenerator::plan_modules(&routes).unwrap();

        let modules: Vec<_> = units.iter().map(|u| u.module.to_string()).collect();
        assert_eq!(
            modules,
            vec!["/", "/sellers", "/sellers/sales", "/sellers/sales/comments"]
        );
        assert!(units[0].routes.is_empty());
        assert!(units[1].children.contains("sales"));
        assert_eq!(units[3].routes.len(), 1);
    }

    #[test]
    fn test_plan_keeps_route_order() {
        let routes = vec![route("store", "/sales"), route("index", "/sales"), route("at", "/sales/:id")];
        let units = SdkGenerator::plan_modules(&routes).unwrap();

        let sales = units.iter().find(|u| u.module.to_string() == "/sales").unwrap();
        let names: Vec<_> = sales.routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["store", "index", "at"]);
    }

    #[test]
    fn test_plan_rejects_duplicate_names() {
        let routes = vec![route("at", "/sales/:id"), route("at", "/sales/:code")];
        let err = SdkGenerator::plan_modules(&routes).unwrap_err();
        assert!(matches!(err, Error::DuplicateRoute { ref name, .. } if name == "at"));
    }

    #[test]
    fn test_plan_rejects_unusable_segments() {
        let err = SdkGenerator::plan_modules(&[route("steal", "/../../tmp/:id")]).unwrap_err();
        assert!(matches!(err, Error::InvalidRoute { ref route, .. } if route == "steal"));
        assert!(err.to_string().contains("\"..\""));
    }

    #[test]
    fn test_same_name_in_different_modules() {
        let routes = vec![route("index", "/sales"), route("index", "/sellers")];
        assert!(SdkGenerator::plan_modules(&routes).is_ok());
    }

    #[test]
    fn test_root_module_path_and_prefix() {
        let generator = SdkGenerator::new().unwrap();
        let code = generator.generate(&[route("health", "/")]).unwrap();

        let file = code.find("functional/index.ts").unwrap();
        assert!(file.content().contains(" * @module api.functional\n"));
        assert!(file.content().contains("from \"./../__internal/Fetcher\""));
        assert!(file.content().contains("export function health"));
    }

    #[test]
    fn test_reexports_use_export_names() {
        let generator = SdkGenerator::new().unwrap();
        let code = generator
            .generate(&[route("index", "/sale-items"), route("index", "/sellers")])
            .unwrap();

        let root = code.find("functional/index.ts").unwrap();
        assert!(root.content().contains(
            "export * as saleItems from \"./sale-items\";\nexport * as sellers from \"./sellers\";"
        ));
    }

    #[test]
    fn test_route_colliding_with_submodule_rejected() {
        let generator = SdkGenerator::new().unwrap();
        let err = generator
            .generate(&[route("sales", "/sellers"), route("index", "/sellers/sales")])
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_malformed_route_fails_whole_generation() {
        let generator = SdkGenerator::new().unwrap();
        let bad = Route::builder("at", HttpMethod::Get, "/sales/:id")
            .parameter(Parameter::path("saleId", "saleId", "number"))
            .build();
        let result = generator.generate(&[route("index", "/sales"), bad]);
        assert!(matches!(result, Err(Error::MissingPlaceholder { .. })));
    }
}
