//! Documentation comment and function signature.

use super::{CONNECTION_PARAMETER, RouteContext};
use crate::common::typescript::{doc_comment, projection};
use sdkgen_core::{DisplayPart, GeneratorConfig, Output, Parameter, ParameterCategory, PartKind, Route, Tag};

pub(super) fn render(ctx: &RouteContext<'_>) -> String {
    let route = ctx.route;
    let config = ctx.config;

    let formals = std::iter::once(format!("{CONNECTION_PARAMETER}: {}", config.connection_type))
        .chain(
            route
                .parameters
                .iter()
                .map(|param| format!("{}: {}", param.name, parameter_type(ctx, param))),
        )
        .map(|formal| format!("        {formal}"))
        .collect::<Vec<_>>()
        .join(",\n");

    let output = match &route.output {
        Output::Void => Output::VOID.to_string(),
        Output::Type(_) => projection(&config.primitive, &format!("{}.Output", route.name)),
    };

    format!(
        "{doc}\nexport function {name}\n    (\n{formals}\n    ): Promise<{output}>",
        doc = doc_comment(&documentation(route, config)),
        name = route.name,
    )
}

fn parameter_type(ctx: &RouteContext<'_>, param: &Parameter) -> String {
    let alias = match param.category {
        ParameterCategory::PathSegment => return param.type_name.clone(),
        ParameterCategory::Query => "Query",
        ParameterCategory::Payload => "Input",
    };
    projection(&ctx.config.primitive, &format!("{}.{alias}", ctx.route.name))
}

/// Builds the text of the documentation comment before it is wrapped.
pub(crate) fn documentation(route: &Route, config: &GeneratorConfig) -> String {
    let mut text = String::new();

    let description = concat_parts(&route.comments);
    if !description.is_empty() {
        text.push_str(&description);
        text.push_str("\n\n");
    }

    let tags = documented_tags(route, config);
    if !tags.is_empty() {
        for tag in &tags {
            let body = tag.text.as_deref().map(concat_parts).unwrap_or_default();
            text.push_str(&format!("@{} {body}\n", tag.name));
        }
        text.push('\n');
    }

    text.push_str(&config.attribution);
    text.push_str(&format!("\n@controller {}", route.symbol));
    text.push_str(&format!("\n@path {} {}", route.method, route.path));
    text
}

fn concat_parts(parts: &[DisplayPart]) -> String {
    parts
        .iter()
        .map(|part| {
            if part.kind == PartKind::LinkText {
                format!(" {}", part.text)
            } else {
                part.text.clone()
            }
        })
        .collect()
}

/// Tags with text, with the connection `@param` placed before the first
/// declared one.
fn documented_tags(route: &Route, config: &GeneratorConfig) -> Vec<Tag> {
    let mut tags: Vec<Tag> = route
        .tags
        .iter()
        .filter(|tag| tag.text.is_some())
        .cloned()
        .collect();

    if let Some(index) = tags.iter().position(|tag| tag.name == "param") {
        tags.insert(
            index,
            Tag::param(CONNECTION_PARAMETER, config.connection_description.as_str()),
        );
    }
    tags
}
