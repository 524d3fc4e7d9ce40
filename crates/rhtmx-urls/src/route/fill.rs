//! Template filling: turns a route template plus parameters into a concrete path
//!
//! Wildcards are resolved in template order. Each one is looked up by name in
//! the named map first; when absent, the next unused positional value is
//! consumed. The positional cursor never moves for wildcards satisfied by name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pattern::{classify_segment, Segment};
use crate::error::{Result, UrlError};
use crate::path::split_path;

/// How unused positional values are treated once every wildcard is filled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamCountPolicy {
    /// Tolerates exactly one unused trailing positional value
    #[default]
    Lenient,
    /// Rejects any unused positional value
    Strict,
}

impl ParamCountPolicy {
    /// Whether `given` positional values are too many when `consumed` were used
    pub fn rejects(&self, consumed: usize, given: usize) -> bool {
        match self {
            ParamCountPolicy::Lenient => consumed + 1 < given,
            ParamCountPolicy::Strict => consumed < given,
        }
    }
}

/// Fills a template using the default (lenient) parameter-count policy
///
/// # Examples
///
/// ```
/// use rhtmx_urls::fill_path_params;
/// use std::collections::HashMap;
///
/// let url = fill_path_params("/users/:id/tickets/:ticket_id", &HashMap::new(), &["5", "9"]).unwrap();
/// assert_eq!(url, "/users/5/tickets/9");
///
/// let mut named = HashMap::new();
/// named.insert("ticket_id".to_string(), "9".to_string());
/// let url = fill_path_params("/users/:id/tickets/:ticket_id", &named, &["5"]).unwrap();
/// assert_eq!(url, "/users/5/tickets/9");
/// ```
pub fn fill_path_params<S: AsRef<str>>(
    template: &str,
    named: &HashMap<String, String>,
    positional: &[S],
) -> Result<String> {
    fill_path_params_with(ParamCountPolicy::default(), template, named, positional)
}

/// Fills a template, rejecting leftover positional values according to `policy`
pub fn fill_path_params_with<S: AsRef<str>>(
    policy: ParamCountPolicy,
    template: &str,
    named: &HashMap<String, String>,
    positional: &[S],
) -> Result<String> {
    let result = fill(policy, template, named, positional);

    if let Err(err) = &result {
        debug!(template, error = %err, "failed to fill path template");
    }

    result
}

fn fill<S: AsRef<str>>(
    policy: ParamCountPolicy,
    template: &str,
    named: &HashMap<String, String>,
    positional: &[S],
) -> Result<String> {
    let mut url = String::with_capacity(template.len());
    let mut remaining = positional.iter();
    let mut consumed = 0;
    let mut wildcard_index = 0;

    for segment in split_path(template) {
        url.push('/');

        let wildcard = match classify_segment(segment) {
            Segment::Literal(text) => {
                url.push_str(text);
                continue;
            }
            Segment::Wildcard(wildcard) => wildcard,
        };
        wildcard_index += 1;

        let value = match named.get(wildcard.name) {
            Some(value) => value.as_str(),
            None => {
                let value = remaining.next().ok_or_else(|| UrlError::MissingParameter {
                    index: wildcard_index,
                    path: template.to_string(),
                })?;
                consumed += 1;
                value.as_ref()
            }
        };

        if !wildcard.accepts(value)? {
            return Err(UrlError::ParameterValidationFailed {
                index: wildcard_index,
                path: template.to_string(),
                value: value.to_string(),
            });
        }

        url.push_str(value);
    }

    if policy.rejects(consumed, positional.len()) {
        return Err(UrlError::TooManyParameters {
            path: template.to_string(),
            expected: consumed,
            given: positional.len(),
        });
    }

    if url.is_empty() {
        url.push('/');
    }

    Ok(url)
}
