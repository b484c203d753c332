//! Function body delegating to the fetch helper.

use super::{CONNECTION_PARAMETER, RouteContext};

pub(super) fn render(ctx: &RouteContext<'_>) -> String {
    let name = &ctx.route.name;
    let call_order = ctx
        .groups
        .call_order
        .iter()
        .map(|param| param.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut arguments = vec![
        CONNECTION_PARAMETER.to_string(),
        format!("{name}.CONFIG"),
        format!("{name}.METHOD"),
        format!("{name}.path({call_order})"),
    ];
    if let Some(payload) = ctx.groups.payload {
        arguments.push(payload.name.clone());
    }

    let arguments = arguments
        .iter()
        .map(|argument| format!("        {argument}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "{{\n    return {fetcher}.fetch\n    (\n{arguments}\n    );\n}}",
        fetcher = ctx.config.fetcher
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkgen_core::{GeneratorConfig, HttpMethod, Parameter, Route};

    #[test]
    fn test_body_with_payload() {
        let route = Route::builder("update", HttpMethod::Put, "/sales/:id")
            .parameter(Parameter::payload("input", "ISale.IUpdate", false))
            .parameter(Parameter::path("id", "id", "string"))
            .build();
        let config = GeneratorConfig::default();
        let ctx = RouteContext::new(&route, &config).unwrap();

        assert_eq!(
            render(&ctx),
            "{\n    return Fetcher.fetch\n    (\n        connection,\n        update.CONFIG,\n        update.METHOD,\n        update.path(id),\n        input\n    );\n}"
        );
    }

    #[test]
    fn test_body_without_payload_passes_query_to_path() {
        let route = Route::builder("index", HttpMethod::Get, "/sales/:id/comments")
            .parameter(Parameter::query("input", "IPage.IRequest"))
            .parameter(Parameter::path("id", "id", "string"))
            .build();
        let config = GeneratorConfig::default();
        let ctx = RouteContext::new(&route, &config).unwrap();
        let body = render(&ctx);

        assert!(body.contains("        index.path(id, input)\n    );"));
    }
}
