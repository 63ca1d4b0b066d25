//! Index resolution by pattern match.

use crate::error::Result;
use crate::matcher::{MatchMode, Matcher};

/// Returns the index of the first item, in scan order, that matches any of
/// the matcher's patterns.
///
/// Items are scanned front to back, or back to front when `reverse` is set;
/// either way the returned index refers to the original position. When no
/// item matches (including when `items` is empty) `fallback` is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use sift_filter::{resolve_index, Matcher, MatchMode};
///
/// let lines = ["a", "mark", "b", "mark", "c"];
/// let matcher = Matcher::build(MatchMode::Occurrence, ["mark"]).unwrap();
///
/// assert_eq!(resolve_index(&lines, &matcher, false, 0), 1);
/// assert_eq!(resolve_index(&lines, &matcher, true, lines.len()), 3);
/// ```
pub fn resolve_index<S: AsRef<str>>(
    items: &[S],
    matcher: &Matcher,
    reverse: bool,
    fallback: usize,
) -> usize {
    let hit = |item: &S| matcher.matches_any(item.as_ref());

    let found = if reverse {
        items.iter().rposition(hit)
    } else {
        items.iter().position(hit)
    };

    found.unwrap_or(fallback)
}

/// Builds a matcher for `patterns` and resolves an index with it.
///
/// A single pattern is passed as a one-element slice. Fails only when a
/// regex pattern does not compile.
pub fn find_index<S, P>(
    items: &[S],
    patterns: &[P],
    mode: MatchMode,
    reverse: bool,
    fallback: usize,
) -> Result<usize>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    let matcher = Matcher::build(mode, patterns.iter().map(|p| p.as_ref().to_string()))?;
    Ok(resolve_index(items, &matcher, reverse, fallback))
}
