//! Output formatters for CLI commands.
//!
//! Summaries are serialized once and rendered as JSON, compact text or a
//! colorized tree depending on `--format`.

use anyhow::Result;
use colored::Colorize;
use sdkgen_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
///
/// # Examples
///
/// ```
/// use sdkgen_cli::formatters::format_output;
/// use sdkgen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     files: usize,
/// }
///
/// let output = format_output(&Summary { files: 3 }, OutputFormat::Text)?;
/// assert_eq!(output, r#"{"files":3}"#);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(serde_json::to_string(data)?),
        OutputFormat::Pretty => Ok(pretty(&serde_json::to_value(data)?, 0)),
    }
}

/// Renders a JSON value with colors, two spaces per nesting level.
fn pretty(value: &Value, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let inner = "  ".repeat(depth + 1);

    match value {
        Value::Null => "null".dimmed().to_string(),
        Value::Bool(b) => b.to_string().yellow().to_string(),
        Value::Number(n) => n.to_string().cyan().to_string(),
        Value::String(s) => format!("\"{}\"", s.green()),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Object(entries) if entries.is_empty() => "{}".to_string(),
        Value::Array(items) => {
            let body = items
                .iter()
                .map(|item| format!("{inner}{}", pretty(item, depth + 1)))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("[\n{body}\n{indent}]")
        }
        Value::Object(entries) => {
            let body = entries
                .iter()
                .map(|(key, val)| {
                    format!("{inner}\"{}\": {}", key.blue().bold(), pretty(val, depth + 1))
                })
                .collect::<Vec<_>>()
                .join(",\n");
            format!("{{\n{body}\n{indent}}}")
        }
    }
}
