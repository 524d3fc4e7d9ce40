//! # RHTMX URLs
//!
//! Reverse URL resolution for nested router scopes:
//! - Named routes registered on a tree of scopes (`/admin` → `/admin/users/:id`)
//! - Lookup by name, nearest scope first, then from the root
//! - Template filling from named parameters with positional fallback
//! - Inline wildcard patterns (`/codes/:code:[0-9]+`) checked against whole values
//!
//! ## Template Syntax
//!
//! - Literal segments: `/users`
//! - Wildcards: `/users/:id`
//! - Wildcards with a pattern: `/users/:id:[0-9]+`
//!
//! ## Concurrency
//!
//! A `RouteTree` is built once and then shared behind `Arc`; lookups only read
//! it. Each request carries its own `RouteBinding`.
//!
//! ## Example
//!
//! ```
//! use rhtmx_urls::{RouteBinding, RouteTree};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let mut tree = RouteTree::new();
//! let users = tree.subscope(tree.root(), "/users").unwrap();
//! let show = tree.add_route(users, "user", "/:id").unwrap();
//! tree.add_route(users, "ticket", "/:id/tickets/:ticket_id:[0-9]+").unwrap();
//! let tree = Arc::new(tree);
//!
//! let mut captured = HashMap::new();
//! captured.insert("id".to_string(), "5".to_string());
//! let binding = RouteBinding::routed("/users/5", tree, show, captured);
//!
//! let url = binding.mapped_url_for("ticket", binding.path_params(), &["9"]).unwrap();
//! assert_eq!(url, "/users/5/tickets/9");
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod path;
pub mod route;
pub mod tree;

pub use binding::RouteBinding;
pub use config::{ReverseConfig, UrlsConfig};
pub use error::{Result, UrlError};
pub use route::{
    classify_segment, fill_path_params, fill_path_params_with, parse_wildcard, ParamCountPolicy,
    Route, RouteId, Segment, WildcardSegment,
};
pub use tree::{Located, RouteTree, Scope, ScopeAncestors, ScopeId, SearchPhase};
