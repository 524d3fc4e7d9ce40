// File: src/binding.rs
// Purpose: Per-request record of the matched route, entry point for reverse lookups

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, UrlError};
use crate::route::{Route, RouteId};
use crate::tree::RouteTree;

/// Route bound to a request once routing has finished
///
/// Each request owns its binding; the tree behind it is shared and read-only.
#[derive(Clone)]
pub struct RouteBinding {
    /// Request URI, used in diagnostics
    pub request_uri: String,

    /// Values captured from the request path (`/users/:id` + `/users/3` → `id: "3"`)
    path_params: HashMap<String, String>,

    tree: Option<Arc<RouteTree>>,
    route: Option<RouteId>,
}

impl std::fmt::Debug for RouteBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteBinding")
            .field("request_uri", &self.request_uri)
            .field("route", &self.route_path())
            .field("path_params", &self.path_params)
            .finish()
    }
}

impl RouteBinding {
    /// Binding for a request that has not been routed yet
    pub fn unrouted(request_uri: impl Into<String>) -> Self {
        Self {
            request_uri: request_uri.into(),
            path_params: HashMap::new(),
            tree: None,
            route: None,
        }
    }

    /// Binding for a request matched to `route` of `tree`
    pub fn routed(
        request_uri: impl Into<String>,
        tree: Arc<RouteTree>,
        route: RouteId,
        path_params: HashMap<String, String>,
    ) -> Self {
        Self {
            request_uri: request_uri.into(),
            path_params,
            tree: Some(tree),
            route: Some(route),
        }
    }

    /// The matched route, if any
    pub fn route(&self) -> Option<&Route> {
        let tree = self.tree.as_deref()?;
        tree.route(self.route?)
    }

    /// Whether the request has been matched to a route
    pub fn is_routed(&self) -> bool {
        self.route().is_some()
    }

    /// Template of the matched route, like "/suggestions/:suggestion_id/comments"
    ///
    /// Empty until the request is routed.
    pub fn route_path(&self) -> &str {
        self.route().map(|r| r.path.as_str()).unwrap_or("")
    }

    /// All captured path parameters
    pub fn path_params(&self) -> &HashMap<String, String> {
        &self.path_params
    }

    /// Get a captured path parameter
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Builds the URL of a named route from positional values
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_urls::{RouteBinding, RouteTree};
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let mut tree = RouteTree::new();
    /// let show = tree.add_route(tree.root(), "ticket", "/users/:id/tickets/:ticket_id").unwrap();
    /// let tree = Arc::new(tree);
    ///
    /// let binding = RouteBinding::routed("/users/1/tickets/2", tree, show, HashMap::new());
    /// assert_eq!(binding.url_for("ticket", &["5", "9"]).unwrap(), "/users/5/tickets/9");
    /// ```
    pub fn url_for<S: AsRef<str>>(&self, name: &str, positional: &[S]) -> Result<String> {
        self.mapped_url_for(name, &HashMap::new(), positional)
    }

    /// Builds the URL of a named route, filling wildcards by name first, then positionally
    ///
    /// The search starts at the scope owning the matched route and falls back to the root.
    pub fn mapped_url_for<S: AsRef<str>>(
        &self,
        name: &str,
        named: &HashMap<String, String>,
        positional: &[S],
    ) -> Result<String> {
        let (tree, route) = self
            .tree
            .as_deref()
            .zip(self.route())
            .ok_or_else(|| UrlError::NotRouted {
                request_uri: self.request_uri.clone(),
            })?;

        tree.mapped_url_for(route.scope, name, named, positional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrouted_binding() {
        let binding = RouteBinding::unrouted("/health");
        assert!(!binding.is_routed());
        assert_eq!(binding.route_path(), "");
        assert!(binding.route().is_none());
        assert_eq!(
            binding.url_for::<&str>("home", &[]).unwrap_err(),
            UrlError::NotRouted {
                request_uri: "/health".to_string()
            }
        );
    }

    #[test]
    fn test_dangling_route_id_is_unrouted() {
        let tree = Arc::new(RouteTree::new());
        let binding = RouteBinding::routed("/x", tree, RouteId(5), HashMap::new());
        assert!(!binding.is_routed());
        assert!(matches!(
            binding.url_for::<&str>("x", &[]),
            Err(UrlError::NotRouted { .. })
        ));
    }

    #[test]
    fn test_path_params() {
        let mut tree = RouteTree::new();
        let id = tree.add_route(tree.root(), "user", "/users/:id").unwrap();

        let mut params = HashMap::new();
        params.insert("id".to_string(), "3".to_string());
        let binding = RouteBinding::routed("/users/3", Arc::new(tree), id, params);

        assert_eq!(binding.path_param("id"), Some("3"));
        assert_eq!(binding.path_param("missing"), None);
        assert_eq!(binding.route_path(), "/users/:id");
    }
}
