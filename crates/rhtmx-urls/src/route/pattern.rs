//! Wildcard segment parsing for route templates
//!
//! Pure functional parsing of template segments into typed segments.
//! `classify_segment` and `parse_wildcard` have no side effects; pattern
//! compilation goes through a process-wide cache.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, UrlError};

/// Compiled inline patterns, keyed by the pattern text as written in the template
static PATTERN_CACHE: Lazy<RwLock<HashMap<String, Regex>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Marker that opens a wildcard segment and separates its inline pattern
const WILDCARD_MARKER: char = ':';

/// A named wildcard recognized in a template segment
///
/// # Examples
///
/// ```
/// use rhtmx_urls::route::pattern::parse_wildcard;
///
/// let wildcard = parse_wildcard(":id:[0-9]+").unwrap();
/// assert_eq!(wildcard.name, "id");
/// assert_eq!(wildcard.pattern, Some("[0-9]+"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WildcardSegment<'a> {
    /// Key used for named-parameter lookup
    pub name: &'a str,
    /// Inline regular expression the value must fully match
    pub pattern: Option<&'a str>,
}

impl WildcardSegment<'_> {
    /// Checks a value against the inline pattern
    ///
    /// Wildcards without a pattern accept anything.
    pub fn accepts(&self, value: &str) -> Result<bool> {
        match self.pattern {
            Some(pattern) => with_compiled(pattern, |re| re.is_match(value)),
            None => Ok(true),
        }
    }
}

/// Represents the two kinds of template segments
///
/// # Examples
///
/// ```
/// use rhtmx_urls::route::pattern::{classify_segment, Segment};
///
/// assert!(matches!(classify_segment("users"), Segment::Literal("users")));
/// assert!(matches!(classify_segment(":id"), Segment::Wildcard(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Static text, emitted verbatim
    Literal(&'a str),
    /// Named wildcard with optional inline pattern
    Wildcard(WildcardSegment<'a>),
}

/// Classifies a segment as literal text or a wildcard (pure function)
///
/// # Parsing Rules
///
/// 1. **Wildcard**: `:name` or `:name:pattern`
/// 2. **Literal**: Any other text, including the empty segment
pub fn classify_segment(segment: &str) -> Segment<'_> {
    parse_wildcard(segment)
        .map(Segment::Wildcard)
        .unwrap_or(Segment::Literal(segment))
}

/// Parses a wildcard segment into its name and optional pattern (pure function)
///
/// Only the first delimiter after the name matters; everything following it is
/// pattern text, so `:date:\d{4}:\d{2}` carries the pattern `\d{4}:\d{2}`.
/// An empty pattern is treated as no pattern.
///
/// Returns `None` for literal segments.
pub fn parse_wildcard(segment: &str) -> Option<WildcardSegment<'_>> {
    let inner = segment.strip_prefix(WILDCARD_MARKER)?;

    let (name, pattern) = inner
        .split_once(WILDCARD_MARKER)
        .map(|(name, pattern)| (name, Some(pattern).filter(|p| !p.is_empty())))
        .unwrap_or((inner, None));

    Some(WildcardSegment { name, pattern })
}

/// Compiles an inline pattern, anchored so that it must match the whole value
///
/// Returns `InvalidPattern` instead of panicking on a malformed expression.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|err| UrlError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })
}

/// Runs `f` against the cached compiled form of `pattern`, compiling it on first use
pub(crate) fn with_compiled<T>(pattern: &str, f: impl FnOnce(&Regex) -> T) -> Result<T> {
    {
        let cache = PATTERN_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(re) = cache.get(pattern) {
            return Ok(f(re));
        }
    }

    let re = compile_pattern(pattern)?;
    let out = f(&re);

    PATTERN_CACHE
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .entry(pattern.to_string())
        .or_insert(re);

    Ok(out)
}
