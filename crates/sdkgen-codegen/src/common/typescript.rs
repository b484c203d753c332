//! TypeScript text utilities.
//!
//! Small, allocation-light helpers that turn raw strings into well-formed
//! TypeScript fragments: identifiers, string literals, template-literal
//! text and JSDoc blocks.
//!
//! # Examples
//!
//! ```
//! use sdkgen_codegen::common::typescript;
//!
//! assert_eq!(typescript::to_camel_case("sale-comments"), "saleComments");
//! assert_eq!(typescript::string_literal("GET"), "\"GET\"");
//! ```

use sdkgen_core::config::is_identifier;

/// Words that cannot name a function or parameter in strict-mode modules.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Returns `true` if `name` is a reserved word.
///
/// # Examples
///
/// ```
/// use sdkgen_codegen::common::typescript::is_reserved_word;
///
/// assert!(is_reserved_word("delete"));
/// assert!(!is_reserved_word("erase"));
/// ```
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Converts a separated name to camelCase.
///
/// `_`, `-`, `.` and spaces all act as word separators.
///
/// # Examples
///
/// ```
/// use sdkgen_codegen::common::typescript::to_camel_case;
///
/// assert_eq!(to_camel_case("send_message"), "sendMessage");
/// assert_eq!(to_camel_case("sale-comments"), "saleComments");
/// assert_eq!(to_camel_case("v1.2"), "v12");
/// assert_eq!(to_camel_case("hello"), "hello");
/// ```
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for ch in name.chars() {
        if matches!(ch, '_' | '-' | '.' | ' ') {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.push(ch.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}

/// Turns a path segment into the identifier it is re-exported under.
///
/// Falls back to a leading underscore when camelCase alone does not yield
/// an identifier (for example `2fa`).
///
/// # Examples
///
/// ```
/// use sdkgen_codegen::common::typescript::export_name;
///
/// assert_eq!(export_name("sales"), "sales");
/// assert_eq!(export_name("sale-items"), "saleItems");
/// assert_eq!(export_name("2fa"), "_2fa");
/// ```
#[must_use]
pub fn export_name(segment: &str) -> String {
    let camel = to_camel_case(segment);
    if is_identifier(&camel) && !is_reserved_word(&camel) {
        return camel;
    }

    let sanitized: String = camel
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '$' { c } else { '_' })
        .collect();
    if is_identifier(&sanitized) && !is_reserved_word(&sanitized) {
        sanitized
    } else {
        format!("_{sanitized}")
    }
}

/// Renders `value` as a double-quoted string literal.
///
/// JSON string escaping is a valid subset of TypeScript string escaping.
#[must_use]
pub fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

/// Escapes literal text for use inside a template literal.
///
/// # Examples
///
/// ```
/// use sdkgen_codegen::common::typescript::escape_template_text;
///
/// assert_eq!(escape_template_text("/files/${x}`"), "/files/\\${x}\\`");
/// ```
#[must_use]
pub fn escape_template_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Wraps text as a JSDoc comment.
///
/// Every line is prefixed with ` * `; `\r\n` line endings are normalized and
/// a literal `*/` is neutralized so the comment cannot close early.
///
/// # Examples
///
/// ```
/// use sdkgen_codegen::common::typescript::doc_comment;
///
/// assert_eq!(doc_comment("Store a comment.\n\n@path POST /comments"),
///     "/**\n * Store a comment.\n * \n * @path POST /comments\n */");
/// ```
#[must_use]
pub fn doc_comment(text: &str) -> String {
    let body = text
        .replace("\r\n", "\n")
        .replace("*/", "*\\/")
        .split('\n')
        .map(|line| format!(" * {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("/**\n{body}\n */")
}

/// Applies the primitive projection to a type reference.
#[must_use]
pub fn projection(primitive: &str, type_ref: &str) -> String {
    format!("{primitive}<{type_ref}>")
}
