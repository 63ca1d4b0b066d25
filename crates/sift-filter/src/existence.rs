//! Existence filtering: keeping or dropping items that match any pattern.

use crate::check::check_empty;
use crate::error::Result;
use crate::matcher::{MatchMode, Matcher};

/// A non-empty pattern set used to include or exclude items.
///
/// Whether a matching item is kept depends on how the filter is applied:
/// as an include filter matches are kept, as an exclude filter they are
/// dropped.
///
/// # Example
///
/// ```
/// use sift_filter::ExistenceFilter;
///
/// let items = ["a", "bb", "ccc", "bb", "d"];
/// let filter = ExistenceFilter::occurrence(["bb"]).unwrap();
///
/// assert_eq!(filter.apply(&items, true), vec![&"bb", &"bb"]);
/// assert_eq!(filter.apply(&items, false), vec![&"a", &"ccc", &"d"]);
/// ```
#[derive(Debug, Clone)]
pub struct ExistenceFilter {
    matcher: Matcher,
}

impl ExistenceFilter {
    /// Creates a filter over `patterns`.
    ///
    /// Fails with [`crate::ValidationError::EmptyValue`] when `patterns` is
    /// empty, or with [`crate::FilterError::Pattern`] when a regex does not
    /// compile.
    pub fn new<I, S>(patterns: I, mode: MatchMode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        check_empty(&patterns, "patterns", "")?;
        Ok(ExistenceFilter {
            matcher: Matcher::build(mode, patterns)?,
        })
    }

    /// Creates a substring-matching filter.
    pub fn occurrence<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(patterns, MatchMode::Occurrence)
    }

    /// Creates a regex-matching filter.
    pub fn regex<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(patterns, MatchMode::Regex)
    }

    /// Returns the patterns in their original order.
    pub fn patterns(&self) -> Vec<&str> {
        self.matcher.patterns()
    }

    /// Returns the match mode.
    pub fn mode(&self) -> MatchMode {
        self.matcher.mode()
    }

    /// Returns `true` if `item` matches any pattern.
    pub fn matches(&self, item: &str) -> bool {
        self.matcher.matches_any(item)
    }

    /// Keeps the items whose match result equals `keep_on_match`.
    pub fn apply<'a, S: AsRef<str>>(&self, items: &'a [S], keep_on_match: bool) -> Vec<&'a S> {
        items
            .iter()
            .filter(|item| self.matches(item.as_ref()) == keep_on_match)
            .collect()
    }

    /// In-place form of [`ExistenceFilter::apply`] over already borrowed items.
    pub fn retain<S: AsRef<str>>(&self, items: &mut Vec<&S>, keep_on_match: bool) {
        items.retain(|item| self.matches(item.as_ref()) == keep_on_match);
    }
}

/// Keeps the items of `items` whose match against `filter` equals
/// `keep_on_match`.
///
/// Free-function form of [`ExistenceFilter::apply`].
pub fn apply_existence<'a, S: AsRef<str>>(
    items: &'a [S],
    filter: &ExistenceFilter,
    keep_on_match: bool,
) -> Vec<&'a S> {
    filter.apply(items, keep_on_match)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FilterError, ValidationError};

    fn sample() -> Vec<String> {
        ["a", "bb", "ccc", "bb", "d"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn include_keeps_matches() {
        let items = sample();
        let filter = ExistenceFilter::occurrence(["bb"]).unwrap();
        assert_eq!(apply_existence(&items, &filter, true), vec!["bb", "bb"]);
    }

    #[test]
    fn exclude_drops_matches() {
        let items = sample();
        let filter = ExistenceFilter::occurrence(["bb"]).unwrap();
        assert_eq!(apply_existence(&items, &filter, false), vec!["a", "ccc", "d"]);
    }

    #[test]
    fn any_pattern_counts() {
        let items = sample();
        let filter = ExistenceFilter::occurrence(["a", "d"]).unwrap();
        assert_eq!(filter.apply(&items, true), vec!["a", "d"]);
    }

    #[test]
    fn regex_mode_is_anchored() {
        let items = sample();
        let filter = ExistenceFilter::regex(["c+$", "b"]).unwrap();
        assert_eq!(filter.apply(&items, true), vec!["bb", "ccc", "bb"]);
        assert_eq!(filter.mode(), MatchMode::Regex);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let items: Vec<String> = Vec::new();
        let filter = ExistenceFilter::occurrence(["x"]).unwrap();
        assert!(filter.apply(&items, true).is_empty());
        assert!(filter.apply(&items, false).is_empty());
    }

    #[test]
    fn empty_patterns_are_rejected() {
        let err = ExistenceFilter::occurrence(Vec::<String>::new()).unwrap_err();
        assert!(matches!(
            err,
            FilterError::Validation(ValidationError::EmptyValue { ref name, .. }) if name == "patterns"
        ));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        assert!(ExistenceFilter::regex(["("]).unwrap_err().is_pattern());
    }

    #[test]
    fn retain_in_place() {
        let items = sample();
        let mut borrowed: Vec<&String> = items.iter().collect();
        let filter = ExistenceFilter::occurrence(["c"]).unwrap();
        filter.retain(&mut borrowed, false);
        assert_eq!(borrowed, vec!["a", "bb", "bb", "d"]);
    }

    #[test]
    fn patterns_accessor() {
        let filter = ExistenceFilter::occurrence(["x", "y"]).unwrap();
        assert_eq!(filter.patterns(), vec!["x", "y"]);
    }
}
