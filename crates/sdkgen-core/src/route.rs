//! Route descriptors.
//!
//! A [`Route`] is the normalized, read-only description of one remote
//! procedure: its transport verb, path template, parameters, output type and
//! documentation fragments. Descriptors are produced by a discovery step and
//! arrive as JSON; the code generator only ever reads them.
//!
//! # Examples
//!
//! ```
//! use sdkgen_core::{HttpMethod, Output, Parameter, Route};
//!
//! let route = Route::builder("store", HttpMethod::Post, "/sellers/:section/sales")
//!     .symbol("SellerSalesController.store()")
//!     .parameter(Parameter::path("section", "section", "string"))
//!     .parameter(Parameter::payload("input", "ISale.IStore", true))
//!     .output("ISale")
//!     .build();
//!
//! assert_eq!(route.parameters.len(), 2);
//! assert_eq!(route.output, Output::Type("ISale".to_string()));
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport verb of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl HttpMethod {
    /// Returns the verb as it appears on the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_core::HttpMethod;
    ///
    /// assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a parameter reaches the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterCategory {
    /// Substituted into a `:field` placeholder of the path template.
    #[serde(rename = "path-segment", alias = "param")]
    PathSegment,
    /// Serialized into the query string.
    #[serde(rename = "query")]
    Query,
    /// Sent as the request body.
    #[serde(rename = "payload", alias = "body")]
    Payload,
}

impl ParameterCategory {
    /// Returns the category name used in descriptors and error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PathSegment => "path-segment",
            Self::Query => "query",
            Self::Payload => "payload",
        }
    }
}

impl fmt::Display for ParameterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One formal parameter of a route.
///
/// # Examples
///
/// ```
/// use sdkgen_core::{Parameter, ParameterCategory};
///
/// let param = Parameter::path("saleId", "id", "number");
/// assert_eq!(param.category, ParameterCategory::PathSegment);
/// assert_eq!(param.placeholder(), "id");
///
/// let query = Parameter::query("input", "IPage.IRequest");
/// assert_eq!(query.placeholder(), "input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Call-site identifier
    pub name: String,
    /// Placeholder name in the path template (path-segment parameters only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Parameter role
    pub category: ParameterCategory,
    /// Type name, emitted verbatim
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the payload is encrypted in transit (payload parameters only)
    #[serde(default)]
    pub encrypted: bool,
}

impl Parameter {
    /// Creates a path-segment parameter bound to the `:field` placeholder.
    #[must_use]
    pub fn path(
        name: impl Into<String>,
        field: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field: Some(field.into()),
            category: ParameterCategory::PathSegment,
            type_name: type_name.into(),
            encrypted: false,
        }
    }

    /// Creates a query parameter.
    #[must_use]
    pub fn query(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: None,
            category: ParameterCategory::Query,
            type_name: type_name.into(),
            encrypted: false,
        }
    }

    /// Creates a payload parameter.
    #[must_use]
    pub fn payload(name: impl Into<String>, type_name: impl Into<String>, encrypted: bool) -> Self {
        Self {
            name: name.into(),
            field: None,
            category: ParameterCategory::Payload,
            type_name: type_name.into(),
            encrypted,
        }
    }

    /// Returns the placeholder this parameter fills.
    ///
    /// Falls back to the call-site name when the descriptor omits `field`.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        self.field.as_deref().unwrap_or(&self.name)
    }
}

/// Output type of a route.
///
/// On the wire the sentinel string `"void"` stands for "no value"; any other
/// string is a type name.
///
/// # Examples
///
/// ```
/// use sdkgen_core::Output;
///
/// assert_eq!(Output::from("void".to_string()), Output::Void);
/// assert_eq!(Output::from("ISale".to_string()).type_name(), Some("ISale"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Output {
    /// The route returns nothing.
    #[default]
    Void,
    /// The route returns a value of the named type.
    Type(String),
}

impl Output {
    /// Wire sentinel for [`Output::Void`].
    pub const VOID: &'static str = "void";

    /// Returns the output type name, or `None` for void routes.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Void => None,
            Self::Type(name) => Some(name),
        }
    }

    /// Returns `true` if the route returns nothing.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }
}

impl From<String> for Output {
    fn from(value: String) -> Self {
        if value == Self::VOID {
            Self::Void
        } else {
            Self::Type(value)
        }
    }
}

impl From<&str> for Output {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Output> for String {
    fn from(output: Output) -> Self {
        match output {
            Output::Void => Output::VOID.to_string(),
            Output::Type(name) => name,
        }
    }
}

/// Kind of a documentation fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    /// Plain prose
    #[default]
    Text,
    /// `{@link` / `}` delimiters of an inline link
    Link,
    /// Target symbol of an inline link
    LinkName,
    /// Display text of an inline link
    LinkText,
    /// Parameter name inside a `@param` tag
    ParameterName,
    /// Separator whitespace
    Space,
    /// Any kind the generator does not distinguish
    #[serde(other)]
    Other,
}

/// One fragment of documentation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPart {
    /// Fragment kind
    #[serde(default)]
    pub kind: PartKind,
    /// Fragment text
    pub text: String,
}

impl DisplayPart {
    /// Creates a fragment of the given kind.
    #[must_use]
    pub fn new(kind: PartKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates a plain-text fragment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(PartKind::Text, text)
    }
}

/// A documentation tag such as `@param` or `@throw`.
///
/// A tag whose `text` is absent is dropped from generated documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name without the leading `@`
    pub name: String,
    /// Tag body fragments
    #[serde(default)]
    pub text: Option<Vec<DisplayPart>>,
}

impl Tag {
    /// Creates a tag whose body is one plain-text fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_core::Tag;
    ///
    /// let tag = Tag::new("return", "Newly archived comment");
    /// assert_eq!(tag.name, "return");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(vec![DisplayPart::text(text)]),
        }
    }

    /// Creates a `@param` tag in the `name description` shape.
    #[must_use]
    pub fn param(parameter: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: "param".to_string(),
            text: Some(vec![
                DisplayPart::new(PartKind::ParameterName, parameter),
                DisplayPart::new(PartKind::Space, " "),
                DisplayPart::text(description),
            ]),
        }
    }
}

/// Normalized descriptor of one remote procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Identifier of the generated callable, unique within its module
    pub name: String,
    /// Transport verb
    pub method: HttpMethod,
    /// Path template with `:field` placeholders
    pub path: String,
    /// Fully-qualified origin reference, emitted verbatim
    #[serde(default)]
    pub symbol: String,
    /// Parameters in call-site order
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Output type or void
    #[serde(default)]
    pub output: Output,
    /// Whether the output is encrypted in transit
    #[serde(default)]
    pub encrypted: bool,
    /// Description fragments
    #[serde(default)]
    pub comments: Vec<DisplayPart>,
    /// Documentation tags
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Route {
    /// Starts building a route with no parameters, void output and no docs.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        method: HttpMethod,
        path: impl Into<String>,
    ) -> RouteBuilder {
        RouteBuilder {
            route: Self {
                name: name.into(),
                method,
                path: path.into(),
                symbol: String::new(),
                parameters: Vec::new(),
                output: Output::Void,
                encrypted: false,
                comments: Vec::new(),
                tags: Vec::new(),
            },
        }
    }
}

/// Builder for [`Route`], mostly useful in tests and fixtures.
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    route: Route,
}

impl RouteBuilder {
    /// Sets the origin reference.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.route.symbol = symbol.into();
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.route.parameters.push(parameter);
        self
    }

    /// Sets the output type; `"void"` selects [`Output::Void`].
    #[must_use]
    pub fn output(mut self, output: impl Into<Output>) -> Self {
        self.route.output = output.into();
        self
    }

    /// Marks the output as encrypted.
    #[must_use]
    pub const fn encrypted(mut self, encrypted: bool) -> Self {
        self.route.encrypted = encrypted;
        self
    }

    /// Appends a description fragment.
    #[must_use]
    pub fn comment(mut self, part: DisplayPart) -> Self {
        self.route.comments.push(part);
        self
    }

    /// Appends a documentation tag.
    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.route.tags.push(tag);
        self
    }

    /// Finishes the route.
    #[must_use]
    pub fn build(self) -> Route {
        self.route
    }
}

/// Object form of a route document.
#[derive(Deserialize)]
struct RouteDocument {
    routes: Vec<Route>,
}

/// Parses route descriptors from JSON.
///
/// Accepts either a bare array of routes or an object with a `routes` array.
///
/// # Errors
///
/// Returns [`Error::SerializationError`] if the text is not a valid route
/// document.
///
/// # Examples
///
/// ```
/// use sdkgen_core::{parse_routes, HttpMethod};
///
/// let routes = parse_routes(r#"{"routes": [
///     {"name": "index", "method": "GET", "path": "/sellers", "output": "ISeller[]"}
/// ]}"#)?;
/// assert_eq!(routes[0].method, HttpMethod::Get);
/// # Ok::<(), sdkgen_core::Error>(())
/// ```
pub fn parse_routes(json: &str) -> Result<Vec<Route>> {
    let parsed = if json.trim_start().starts_with('{') {
        serde_json::from_str::<RouteDocument>(json).map(|document| document.routes)
    } else {
        serde_json::from_str::<Vec<Route>>(json)
    };
    let routes = parsed.map_err(|e| Error::SerializationError {
        message: format!("invalid route document: {e}"),
        source: Some(e),
    })?;

    tracing::debug!("Parsed {} route descriptors", routes.len());
    Ok(routes)
}
