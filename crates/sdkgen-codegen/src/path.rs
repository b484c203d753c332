//! Path template handling.
//!
//! A route path such as `/sellers/:section/sales/:saleId` is scanned for
//! `:field` placeholders. Each path-segment parameter must bind exactly one
//! placeholder; the bound placeholders become `${name}` substitutions in the
//! template literal returned by the generated path builder.

use crate::classifier::ParameterGroups;
use crate::common::typescript::escape_template_text;
use regex::Regex;
use sdkgen_core::{Error, Parameter, Result, Route};
use std::ops::Range;
use std::sync::LazyLock;

// A placeholder starts a path segment: `/:id` or a leading `:id`.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|/):([A-Za-z_$][A-Za-z0-9_$]*)").expect("valid regex"));

/// A `:field` placeholder found in a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Placeholder name without the colon
    pub name: &'a str,
    /// Byte range of `:name` in the template
    pub span: Range<usize>,
}

/// Returns the placeholders of `template` in order of appearance.
///
/// # Examples
///
/// ```
/// use sdkgen_codegen::path::placeholders;
///
/// let found: Vec<_> = placeholders("/sellers/:section/sales/:saleId")
///     .into_iter()
///     .map(|p| p.name)
///     .collect();
/// assert_eq!(found, vec!["section", "saleId"]);
/// ```
#[must_use]
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|name| Placeholder {
            name: name.as_str(),
            span: name.start() - 1..name.end(),
        })
        .collect()
}

/// Renders the template literal returned by a route's path builder.
///
/// Bound placeholders become `${name}`; unbound ones stay literal. With a
/// query parameter, `?${new URLSearchParams(<query> as any).toString()}` is
/// appended.
///
/// # Errors
///
/// Returns [`Error::MissingPlaceholder`] if a path-segment parameter's field
/// does not occur exactly once in the template, and [`Error::InvalidRoute`]
/// if two path-segment parameters bind the same placeholder.
///
/// # Examples
///
/// ```
/// use sdkgen_codegen::classifier::ParameterGroups;
/// use sdkgen_codegen::path::render_path_literal;
/// use sdkgen_core::{HttpMethod, Parameter, Route};
///
/// let route = Route::builder("at", HttpMethod::Get, "/sales/:id")
///     .parameter(Parameter::path("saleId", "id", "number"))
///     .build();
/// let groups = ParameterGroups::classify(&route)?;
///
/// assert_eq!(render_path_literal(&route, &groups)?, "`/sales/${saleId}`");
/// # Ok::<(), sdkgen_core::Error>(())
/// ```
pub fn render_path_literal(route: &Route, groups: &ParameterGroups<'_>) -> Result<String> {
    let found = placeholders(&route.path);
    let bindings = bind_placeholders(route, groups, &found)?;

    let mut literal = String::from("`");
    let mut cursor = 0;
    for (placeholder, binding) in found.iter().zip(&bindings) {
        let Some(param) = binding else {
            continue;
        };
        literal.push_str(&escape_template_text(
            &route.path[cursor..placeholder.span.start],
        ));
        literal.push_str("${");
        literal.push_str(&param.name);
        literal.push('}');
        cursor = placeholder.span.end;
    }
    literal.push_str(&escape_template_text(&route.path[cursor..]));

    if let Some(query) = groups.query {
        literal.push_str("?${new URLSearchParams(");
        literal.push_str(&query.name);
        literal.push_str(" as any).toString()}");
    }
    literal.push('`');

    Ok(literal)
}

/// Pairs every placeholder with the path-segment parameter that fills it.
fn bind_placeholders<'p>(
    route: &Route,
    groups: &ParameterGroups<'p>,
    found: &[Placeholder<'_>],
) -> Result<Vec<Option<&'p Parameter>>> {
    let mut bindings: Vec<Option<&'p Parameter>> = vec![None; found.len()];

    for param in groups.path_segments() {
        let field = param.placeholder();
        let mut matches = found
            .iter()
            .enumerate()
            .filter(|(_, placeholder)| placeholder.name == field)
            .map(|(index, _)| index);

        let (Some(index), None) = (matches.next(), matches.next()) else {
            return Err(Error::MissingPlaceholder {
                route: route.name.clone(),
                parameter: param.name.clone(),
                field: field.to_string(),
            });
        };

        if let Some(previous) = bindings[index].replace(param) {
            return Err(Error::InvalidRoute {
                route: route.name.clone(),
                reason: format!(
                    "parameters '{}' and '{}' both bind placeholder ':{field}'",
                    previous.name, param.name
                ),
            });
        }
    }

    for (placeholder, binding) in found.iter().zip(&bindings) {
        if binding.is_none() {
            tracing::warn!(
                route = %route.name,
                placeholder = placeholder.name,
                "Placeholder has no path-segment parameter and stays literal"
            );
        }
    }

    Ok(bindings)
}
