//! Parameter classification.
//!
//! Splits a route's parameters into the query role, the payload role and the
//! call-order list the path builder takes: every path-segment parameter in
//! declaration order, followed by the query parameter when there is one.
//!
//! # Examples
//!
//! ```
//! use sdkgen_codegen::classifier::ParameterGroups;
//! use sdkgen_core::{HttpMethod, Parameter, Route};
//!
//! let route = Route::builder("index", HttpMethod::Get, "/sellers/:section/sales")
//!     .parameter(Parameter::query("input", "IPage.IRequest"))
//!     .parameter(Parameter::path("section", "section", "string"))
//!     .build();
//!
//! let groups = ParameterGroups::classify(&route)?;
//! let order: Vec<_> = groups.call_order.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(order, vec!["section", "input"]);
//! assert!(groups.payload.is_none());
//! # Ok::<(), sdkgen_core::Error>(())
//! ```

use sdkgen_core::{Error, Parameter, ParameterCategory, Result, Route};

/// Parameters of one route grouped by role.
#[derive(Debug, Clone)]
pub struct ParameterGroups<'a> {
    /// The query parameter, if any
    pub query: Option<&'a Parameter>,
    /// The payload parameter, if any
    pub payload: Option<&'a Parameter>,
    /// Path-segment parameters in declaration order, then the query parameter
    pub call_order: Vec<&'a Parameter>,
}

impl<'a> ParameterGroups<'a> {
    /// Classifies the parameters of `route`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRole`] naming the second parameter when the
    /// route declares more than one query or more than one payload parameter.
    pub fn classify(route: &'a Route) -> Result<Self> {
        let mut query = None;
        let mut payload = None;
        let mut path_segments = Vec::new();

        for param in &route.parameters {
            let slot = match param.category {
                ParameterCategory::PathSegment => {
                    path_segments.push(param);
                    continue;
                }
                ParameterCategory::Query => &mut query,
                ParameterCategory::Payload => &mut payload,
            };

            if slot.is_some() {
                return Err(Error::DuplicateRole {
                    route: route.name.clone(),
                    role: param.category.to_string(),
                    parameter: param.name.clone(),
                });
            }
            *slot = Some(param);
        }

        let mut call_order = path_segments;
        call_order.extend(query);

        Ok(Self {
            query,
            payload,
            call_order,
        })
    }

    /// Returns the path-segment parameters in declaration order.
    pub fn path_segments(&self) -> impl Iterator<Item = &'a Parameter> + '_ {
        self.call_order
            .iter()
            .copied()
            .filter(|param| param.category == ParameterCategory::PathSegment)
    }
}
