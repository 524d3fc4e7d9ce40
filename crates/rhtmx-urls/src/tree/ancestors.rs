use super::{RouteTree, ScopeId};

/// Lazy iterator that walks parent links from a scope up to the root
///
/// For scope chain `root → api → v1 → users`, starting at `users` yields:
/// `users` → `v1` → `api` → `root`
///
/// The walk stops at the first scope without a parent, so `last()` is the root.
///
/// # Examples
///
/// ```
/// use rhtmx_urls::RouteTree;
///
/// let mut tree = RouteTree::new();
/// let api = tree.subscope(tree.root(), "/api").unwrap();
/// let v1 = tree.subscope(api, "/v1").unwrap();
///
/// let chain: Vec<_> = tree.ancestors(v1).collect();
/// assert_eq!(chain, vec![v1, api, tree.root()]);
/// ```
pub struct ScopeAncestors<'a> {
    tree: &'a RouteTree,
    current: Option<ScopeId>,
}

impl<'a> ScopeAncestors<'a> {
    /// Creates a walk starting at (and including) `start`
    pub(crate) fn new(tree: &'a RouteTree, start: ScopeId) -> Self {
        Self {
            tree,
            current: tree.scope(start).map(|_| start),
        }
    }
}

impl Iterator for ScopeAncestors<'_> {
    type Item = ScopeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.tree.parent(current);
        Some(current)
    }
}

impl Clone for ScopeAncestors<'_> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            current: self.current,
        }
    }
}
