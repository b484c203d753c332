//! Companion namespace: type aliases, metadata constants, path builder.

use super::RouteContext;
use crate::common::typescript::{projection, string_literal};

pub(super) fn render(ctx: &RouteContext<'_>) -> String {
    let route = ctx.route;
    let groups = &ctx.groups;
    let primitive = &ctx.config.primitive;

    let aliases: Vec<(&str, &str)> = [
        groups.query.map(|param| ("Query", param.type_name.as_str())),
        groups.payload.map(|param| ("Input", param.type_name.as_str())),
        route.output.type_name().map(|ty| ("Output", ty)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut out = format!("export namespace {}\n{{\n", route.name);

    if !aliases.is_empty() {
        for (alias, type_name) in &aliases {
            out.push_str(&format!(
                "    export type {alias} = {};\n",
                projection(primitive, type_name)
            ));
        }
        out.push('\n');
    }

    let input_encrypted = groups.payload.is_some_and(|param| param.encrypted);
    out.push_str(&format!(
        "    export const METHOD = {};\n",
        string_literal(route.method.as_str())
    ));
    out.push_str(&format!(
        "    export const PATH = {};\n",
        string_literal(&route.path)
    ));
    out.push_str("    export const CONFIG = {\n");
    out.push_str(&format!("        input_encrypted: {input_encrypted},\n"));
    out.push_str(&format!("        output_encrypted: {},\n", route.encrypted));
    out.push_str("    };\n\n");

    let formals = groups
        .call_order
        .iter()
        .map(|param| format!("{}: {}", param.name, param.type_name))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("    export function path({formals}): string\n"));
    out.push_str("    {\n");
    out.push_str(&format!("        return {};\n", ctx.path_literal));
    out.push_str("    }\n}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkgen_core::{GeneratorConfig, HttpMethod, Parameter, Route};

    fn render_route(route: &Route) -> String {
        let config = GeneratorConfig::default();
        let ctx = RouteContext::new(route, &config).unwrap();
        render(&ctx)
    }

    #[test]
    fn test_companion_without_aliases() {
        let route = Route::builder("erase", HttpMethod::Delete, "/sales/:id")
            .parameter(Parameter::path("id", "id", "string"))
            .build();

        assert_eq!(
            render_route(&route),
            "export namespace erase\n{\n    export const METHOD = \"DELETE\";\n    export const PATH = \"/sales/:id\";\n    export const CONFIG = {\n        input_encrypted: false,\n        output_encrypted: false,\n    };\n\n    export function path(id: string): string\n    {\n        return `/sales/${id}`;\n    }\n}"
        );
    }

    #[test]
    fn test_aliases_in_role_order() {
        let route = Route::builder("update", HttpMethod::Put, "/sales")
            .parameter(Parameter::payload("input", "ISale.IUpdate", true))
            .parameter(Parameter::query("options", "ISale.IOptions"))
            .output("ISale")
            .encrypted(true)
            .build();
        let text = render_route(&route);

        assert!(text.starts_with(
            "export namespace update\n{\n    export type Query = Primitive<ISale.IOptions>;\n    export type Input = Primitive<ISale.IUpdate>;\n    export type Output = Primitive<ISale>;\n\n    export const METHOD"
        ));
        assert!(text.contains("        input_encrypted: true,\n        output_encrypted: true,\n"));
        assert!(text.contains("    export function path(options: ISale.IOptions): string\n"));
    }

    #[test]
    fn test_unencrypted_payload_flag() {
        let route = Route::builder("store", HttpMethod::Post, "/sales")
            .parameter(Parameter::payload("input", "ISale.IStore", false))
            .encrypted(true)
            .build();
        let text = render_route(&route);
        assert!(text.contains("        input_encrypted: false,\n        output_encrypted: true,\n"));
    }
}
