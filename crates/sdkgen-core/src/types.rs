//! Strong domain types for sdkgen.
//!
//! # Examples
//!
//! ```
//! use sdkgen_core::ModulePath;
//!
//! let module = ModulePath::from_route_path("/sellers/:section/sales/:saleId/comments");
//! assert_eq!(module.segments(), ["sellers", "sales", "comments"]);
//! assert_eq!(module.dotted("api.functional"), "api.functional.sellers.sales.comments");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Module a route belongs to (newtype over its literal path segments).
///
/// Routes are grouped into one output file per module. The module of a
/// route is the sequence of literal segments of its path template, with
/// `:field` placeholders and empty segments dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModulePath(Vec<String>);

impl ModulePath {
    /// Returns the root module, which has no segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_core::ModulePath;
    ///
    /// assert!(ModulePath::root().is_root());
    /// assert!(ModulePath::from_route_path("/:id").is_root());
    /// ```
    #[inline]
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Derives the module from a route path template.
    #[must_use]
    pub fn from_route_path(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty() && !segment.starts_with(':'))
            .map(String::from)
            .collect();
        Self(segments)
    }

    /// Returns the literal segments.
    #[inline]
    #[must_use]
    pub const fn segments(&self) -> &[String] {
        self.0.as_slice()
    }

    /// Returns the number of segments.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root module.
    #[inline]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last segment, or `None` for the root module.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns the enclosing module, or `None` for the root module.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_core::ModulePath;
    ///
    /// let module = ModulePath::from_route_path("/sellers/sales");
    /// assert_eq!(module.parent(), Some(ModulePath::from_route_path("/sellers")));
    /// assert_eq!(ModulePath::root().parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// Joins the segments under a dotted prefix.
    #[must_use]
    pub fn dotted(&self, prefix: &str) -> String {
        std::iter::once(prefix)
            .chain(self.0.iter().map(String::as_str))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Returns the first segment that cannot name a module directory.
    ///
    /// Segments become directory names, import specifiers and part of a doc
    /// comment. `.`, `..`, quotes, backslashes and control characters are
    /// refused; `*/` cannot occur since segments never contain `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_core::ModulePath;
    ///
    /// assert_eq!(ModulePath::from_route_path("/sellers/:id/sales").invalid_segment(), None);
    /// assert_eq!(ModulePath::from_route_path("/a/../b").invalid_segment(), Some(".."));
    /// ```
    #[must_use]
    pub fn invalid_segment(&self) -> Option<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .find(|segment| !is_directory_segment(segment))
    }

    /// Joins the segments as a relative directory (empty for the root).
    #[must_use]
    pub fn directory(&self) -> String {
        self.0.join("/")
    }
}

fn is_directory_segment(segment: &str) -> bool {
    !matches!(segment, "." | "..")
        && !segment
            .chars()
            .any(|c| matches!(c, '"' | '\'' | '`' | '\\') || c.is_control())
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.directory())
    }
}

impl From<Vec<String>> for ModulePath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}
