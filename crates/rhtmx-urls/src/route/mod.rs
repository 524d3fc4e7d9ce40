//! Route module for reverse URL resolution
//!
//! Contains the registered route type plus pure components for template parsing and filling:
//! - `pattern`: wildcard segment recognition and inline pattern compilation
//! - `fill`: template filling from named and positional parameters

pub mod fill;
pub mod pattern;

pub use fill::{fill_path_params, fill_path_params_with, ParamCountPolicy};
pub use pattern::{classify_segment, parse_wildcard, Segment, WildcardSegment};

use crate::error::Result;
use crate::path::split_path;
use crate::tree::ScopeId;

/// Identifies a route inside its `RouteTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    /// Position of the route in registration order across the whole tree
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A path template registered on a scope
#[derive(Debug, Clone)]
pub struct Route {
    /// Name used for reverse lookup (unnamed routes are never found by name)
    pub name: Option<String>,
    /// Full template, including the owning scope's prefix, like "/admin/users/:id"
    pub path: String,
    /// Scope the route was registered on
    pub scope: ScopeId,
}

impl Route {
    pub(crate) fn new(name: Option<String>, path: String, scope: ScopeId) -> Self {
        Self { name, path, scope }
    }

    /// Whether this route answers to `name`
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Iterates over the wildcard segments of the template, in order
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_urls::RouteTree;
    ///
    /// let mut tree = RouteTree::new();
    /// let id = tree.add_route(tree.root(), "ticket", "/users/:id/tickets/:ticket_id:[0-9]+").unwrap();
    ///
    /// let names: Vec<&str> = tree.route(id).unwrap().wildcards().map(|w| w.name).collect();
    /// assert_eq!(names, vec!["id", "ticket_id"]);
    /// ```
    pub fn wildcards(&self) -> impl Iterator<Item = WildcardSegment<'_>> {
        split_path(&self.path)
            .into_iter()
            .filter_map(parse_wildcard)
    }

    /// Compiles every inline pattern once, so malformed templates fail at registration
    pub(crate) fn validate(&self) -> Result<()> {
        self.wildcards()
            .filter_map(|w| w.pattern)
            .try_for_each(|source| pattern::with_compiled(source, |_| ()))
    }
}
