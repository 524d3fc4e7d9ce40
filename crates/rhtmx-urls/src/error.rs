// File: src/error.rs
// Purpose: Error type shared by reverse lookup, template filling and registration

use thiserror::Error;

/// Everything that can go wrong while resolving a route name into a URL
///
/// Reverse lookups are often attempted speculatively (optional links in a
/// template, for instance), so every failure is reported as a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The request has not been matched to a route yet
    #[error("Request to {request_uri} is not associated with any route.")]
    NotRouted { request_uri: String },

    /// No scope reachable from the starting scope registers this name
    #[error("Route with name {name} was not found.")]
    RouteNotFound { name: String },

    /// Positional values ran out before every wildcard was filled
    #[error("Could not match parameter #{index} for path '{path}'.")]
    MissingParameter { index: usize, path: String },

    /// A value does not satisfy the wildcard's inline pattern
    #[error("Could not match the parameter #{index} from path '{path}'. Tried to match with '{value}'.")]
    ParameterValidationFailed {
        index: usize,
        path: String,
        value: String,
    },

    /// Positional values were left over after filling the template
    #[error("Path '{path}' takes {expected} parameters, while {given} was given.")]
    TooManyParameters {
        path: String,
        expected: usize,
        given: usize,
    },

    /// An inline wildcard pattern is not a valid regular expression
    #[error("Invalid wildcard pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A scope id that does not belong to this tree
    #[error("Scope #{0} does not exist in this route tree.")]
    UnknownScope(usize),
}

pub type Result<T> = std::result::Result<T, UrlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_diagnostics() {
        let err = UrlError::ParameterValidationFailed {
            index: 2,
            path: "/users/:id/tickets/:ticket_id:[0-9]+".to_string(),
            value: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#2"));
        assert!(msg.contains("/users/:id/tickets/:ticket_id:[0-9]+"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_not_routed_mentions_uri() {
        let err = UrlError::NotRouted {
            request_uri: "/health".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request to /health is not associated with any route."
        );
    }
}
