//! Route lookup by name.
//!
//! # Search Order
//! 1. Breadth-first from the start scope (its own subtree)
//! 2. If nothing matched, breadth-first from the root, skipping every scope
//!    already scanned in step 1
//!
//! Nearby routes win over distant ones, and any route in the tree is still
//! reachable. First match in registration order wins within a scope.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use super::{RouteTree, ScopeId};
use crate::error::{Result, UrlError};
use crate::route::{Route, RouteId};

/// Which pass of the search produced the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Found in the subtree of the start scope
    Local,
    /// Found by the fallback search from the root
    Root,
}

/// Outcome of a successful lookup
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub id: RouteId,
    pub route: &'a Route,
    pub phase: SearchPhase,
    /// Scopes scanned across both passes, the matching one included
    pub scopes_visited: usize,
}

/// Breadth-first walker sharing one visited-set across passes
struct Search<'a> {
    tree: &'a RouteTree,
    name: &'a str,
    visited: HashSet<ScopeId>,
    queue: VecDeque<ScopeId>,
}

impl<'a> Search<'a> {
    fn new(tree: &'a RouteTree, name: &'a str) -> Self {
        Self {
            tree,
            name,
            visited: HashSet::new(),
            queue: VecDeque::new(),
        }
    }

    /// Runs one pass from `start`; already-visited scopes are skipped
    fn run(&mut self, start: ScopeId) -> Option<RouteId> {
        self.queue.push_back(start);

        while let Some(id) = self.queue.pop_front() {
            if !self.visited.insert(id) {
                continue;
            }

            let Some(scope) = self.tree.scope(id) else {
                continue;
            };
            trace!(scope = id.index(), route = self.name, "scanning scope");

            let found = scope
                .routes()
                .iter()
                .copied()
                .find(|&route| self.tree.route(route).is_some_and(|r| r.is_named(self.name)));

            if found.is_some() {
                self.queue.clear();
                return found;
            }

            self.queue.extend(scope.children().iter().copied());
        }

        None
    }
}

impl RouteTree {
    /// Finds the route named `name`, searching outward from `start`
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_urls::{RouteTree, SearchPhase};
    ///
    /// let mut tree = RouteTree::new();
    /// let users = tree.subscope(tree.root(), "/users").unwrap();
    /// let posts = tree.subscope(tree.root(), "/posts").unwrap();
    /// tree.add_route(posts, "post", "/:slug").unwrap();
    ///
    /// let located = tree.locate(users, "post").unwrap();
    /// assert_eq!(located.route.path, "/posts/:slug");
    /// assert_eq!(located.phase, SearchPhase::Root);
    /// ```
    pub fn locate(&self, start: ScopeId, name: &str) -> Result<Located<'_>> {
        self.checked(start)?;
        debug!(scope = start.index(), route = name, "locating route");

        let mut search = Search::new(self, name);

        let mut found = search.run(start).map(|id| (id, SearchPhase::Local));

        if found.is_none() {
            if let Some(root) = self.root_of(start) {
                debug!(root = root.index(), route = name, "falling back to root scope");
                found = search.run(root).map(|id| (id, SearchPhase::Root));
            }
        }

        let (id, phase) = found.ok_or_else(|| UrlError::RouteNotFound {
            name: name.to_string(),
        })?;

        let route = self.route(id).ok_or_else(|| UrlError::RouteNotFound {
            name: name.to_string(),
        })?;

        debug!(
            route = name,
            path = %route.path,
            ?phase,
            scopes_visited = search.visited.len(),
            "located route"
        );

        Ok(Located {
            id,
            route,
            phase,
            scopes_visited: search.visited.len(),
        })
    }
}
