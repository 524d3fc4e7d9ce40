//! Routing tree: nested scopes that own named routes
//!
//! # Data Flow
//! ```text
//! Setup (single-threaded):
//!     RouteTree::new()            → root scope
//!     subscope(parent, prefix)    → child scope, prefix inherited
//!     add_route(scope, name, path) → route with scope prefix prepended
//!     Arc::new(tree)              → frozen, shared read-only
//!
//! Reverse lookup:
//!     locate(start, name)  → local BFS, then root BFS (shared visited-set)
//!     fill_path_params()   → concrete path
//! ```
//!
//! Scopes and routes live in arenas and are addressed by index, so the tree
//! is `Send + Sync` and needs no locking once built.

mod ancestors;
mod locate;

pub use ancestors::ScopeAncestors;
pub use locate::{Located, SearchPhase};

use std::collections::HashMap;

use tracing::debug;

use crate::config::ReverseConfig;
use crate::error::{Result, UrlError};
use crate::path::join_prefix;
use crate::route::{fill_path_params_with, Route, RouteId};

/// Identifies a scope inside its `RouteTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub(crate) usize);

impl ScopeId {
    /// Position of the scope in creation order (the root is 0)
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node of the routing tree
#[derive(Debug, Clone)]
pub struct Scope {
    parent: Option<ScopeId>,
    children: Vec<ScopeId>,
    routes: Vec<RouteId>,
    prefix: String,
}

impl Scope {
    fn new(parent: Option<ScopeId>, prefix: String) -> Self {
        Self {
            parent,
            children: Vec::new(),
            routes: Vec::new(),
            prefix,
        }
    }

    /// Parent scope, `None` for the root
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Child scopes in the order they were attached
    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    /// Routes registered directly on this scope, in registration order
    pub fn routes(&self) -> &[RouteId] {
        &self.routes
    }

    /// Path prefix prepended to every route registered here
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Tree of router scopes with their routes
///
/// # Examples
///
/// ```
/// use rhtmx_urls::RouteTree;
///
/// let mut tree = RouteTree::new();
/// let admin = tree.subscope(tree.root(), "/admin").unwrap();
/// tree.add_route(admin, "admin.user", "/users/:id").unwrap();
///
/// let url = tree.url_for(tree.root(), "admin.user", &["7"]).unwrap();
/// assert_eq!(url, "/admin/users/7");
/// ```
#[derive(Debug, Clone)]
pub struct RouteTree {
    scopes: Vec<Scope>,
    routes: Vec<Route>,
    config: ReverseConfig,
}

impl RouteTree {
    /// Creates a tree holding only the root scope, with default settings
    pub fn new() -> Self {
        Self::with_config(ReverseConfig::default())
    }

    /// Creates a tree holding only the root scope
    pub fn with_config(config: ReverseConfig) -> Self {
        Self {
            scopes: vec![Scope::new(None, String::new())],
            routes: Vec::new(),
            config,
        }
    }

    /// The root scope
    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn config(&self) -> &ReverseConfig {
        &self.config
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.0)
    }

    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scope(id).and_then(Scope::parent)
    }

    pub fn children(&self, id: ScopeId) -> &[ScopeId] {
        self.scope(id).map(Scope::children).unwrap_or(&[])
    }

    /// Number of scopes, root included
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Walks from `start` up to the root, `start` first
    pub fn ancestors(&self, start: ScopeId) -> ScopeAncestors<'_> {
        ScopeAncestors::new(self, start)
    }

    /// The root of the tree `start` belongs to
    pub fn root_of(&self, start: ScopeId) -> Option<ScopeId> {
        self.ancestors(start).last()
    }

    fn checked(&self, id: ScopeId) -> Result<&Scope> {
        self.scope(id).ok_or(UrlError::UnknownScope(id.0))
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Creates a child scope whose prefix extends the parent's
    pub fn subscope(&mut self, parent: ScopeId, prefix: &str) -> Result<ScopeId> {
        let prefix = join_prefix(&self.checked(parent)?.prefix, prefix).into_owned();
        let prefix = if prefix == "/" { String::new() } else { prefix };

        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope::new(Some(parent), prefix));
        self.scopes[parent.0].children.push(id);

        Ok(id)
    }

    /// Attaches an existing scope under an additional parent
    ///
    /// The child keeps its original parent link, so root resolution is
    /// unaffected; lookups still scan it at most once.
    pub fn link_child(&mut self, parent: ScopeId, child: ScopeId) -> Result<()> {
        self.checked(parent)?;
        self.checked(child)?;
        self.scopes[parent.0].children.push(child);
        Ok(())
    }

    /// Registers a named route on `scope`
    ///
    /// The stored template is the scope prefix joined with `path`. Every
    /// inline pattern is compiled here, so a malformed one is rejected before
    /// the tree starts serving.
    pub fn add_route(
        &mut self,
        scope: ScopeId,
        name: impl Into<String>,
        path: &str,
    ) -> Result<RouteId> {
        self.insert_route(scope, Some(name.into()), path)
    }

    /// Registers a route that cannot be found by reverse lookup
    pub fn add_unnamed_route(&mut self, scope: ScopeId, path: &str) -> Result<RouteId> {
        self.insert_route(scope, None, path)
    }

    fn insert_route(&mut self, scope: ScopeId, name: Option<String>, path: &str) -> Result<RouteId> {
        let path = join_prefix(&self.checked(scope)?.prefix, path).into_owned();
        let route = Route::new(name, path, scope);
        route.validate()?;

        let id = RouteId(self.routes.len());
        self.routes.push(route);
        self.scopes[scope.0].routes.push(id);

        Ok(id)
    }

    // ========================================================================
    // Reverse Lookup
    // ========================================================================

    /// Builds the URL of the named route nearest to `start` from positional values
    pub fn url_for<S: AsRef<str>>(&self, start: ScopeId, name: &str, positional: &[S]) -> Result<String> {
        self.mapped_url_for(start, name, &HashMap::new(), positional)
    }

    /// Builds the URL of the named route nearest to `start`
    ///
    /// Wildcards are filled from `named` first, then from `positional` in order.
    pub fn mapped_url_for<S: AsRef<str>>(
        &self,
        start: ScopeId,
        name: &str,
        named: &HashMap<String, String>,
        positional: &[S],
    ) -> Result<String> {
        let located = self.locate(start, name)?;
        let url = fill_path_params_with(self.config.param_count, &located.route.path, named, positional)?;

        debug!(route = name, %url, "reversed route");
        Ok(url)
    }
}

impl Default for RouteTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = RouteTree::new();
        assert_eq!(tree.scope_count(), 1);
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.scope(tree.root()).unwrap().prefix(), "");
    }

    #[test]
    fn test_subscope_prefix_inheritance() {
        let mut tree = RouteTree::new();
        let api = tree.subscope(tree.root(), "/api").unwrap();
        let v1 = tree.subscope(api, "v1/").unwrap();
        assert_eq!(tree.scope(v1).unwrap().prefix(), "/api/v1");
        assert_eq!(tree.children(api), &[v1]);
    }

    #[test]
    fn test_subscope_with_empty_prefix() {
        let mut tree = RouteTree::new();
        let group = tree.subscope(tree.root(), "").unwrap();
        let id = tree.add_route(group, "about", "/about").unwrap();
        assert_eq!(tree.route(id).unwrap().path, "/about");
    }

    #[test]
    fn test_route_gets_scope_prefix() {
        let mut tree = RouteTree::new();
        let admin = tree.subscope(tree.root(), "/admin").unwrap();
        let id = tree.add_route(admin, "admin.home", "/").unwrap();
        let route = tree.route(id).unwrap();
        assert_eq!(route.path, "/admin");
        assert_eq!(route.scope, admin);
    }

    #[test]
    fn test_add_route_rejects_invalid_pattern() {
        let mut tree = RouteTree::new();
        let err = tree.add_route(tree.root(), "broken", "/x/:id:[a-").unwrap_err();
        assert!(matches!(err, UrlError::InvalidPattern { .. }));
        assert!(tree.scope(tree.root()).unwrap().routes().is_empty());
    }

    #[test]
    fn test_unknown_scope() {
        let mut tree = RouteTree::new();
        let err = tree.subscope(ScopeId(9), "/x").unwrap_err();
        assert_eq!(err, UrlError::UnknownScope(9));
    }

    #[test]
    fn test_root_of_leaf() {
        let mut tree = RouteTree::new();
        let a = tree.subscope(tree.root(), "/a").unwrap();
        let b = tree.subscope(a, "/b").unwrap();
        assert_eq!(tree.root_of(b), Some(tree.root()));
        assert_eq!(tree.root_of(ScopeId(42)), None);
    }
}
