//! Range filtering: slicing a sequence between two boundaries.
//!
//! A [`RangeFilter`] keeps the window of items between a start and an end
//! [`Boundary`]. Each boundary is either a literal index or a set of
//! patterns. Pattern boundaries resolve asymmetrically:
//!
//! - the start is the **first** matching item, scanning forward (fallback `0`)
//! - the end is the **last** matching item, scanning backward (fallback `len`)
//!
//! so repeated markers produce the widest window they enclose. The end item
//! itself is excluded unless `include_end` is set.
//!
//! # The `end: 0` sentinel
//!
//! A literal end of `0` does **not** mean index zero: it means "to the end of
//! the sequence", and it is the default. Configuration files rely on
//! `end: 0` reading as "no end bound", so the sentinel is kept even though it
//! makes an explicit empty window through `end: 0` impossible.

use std::ops::Range;

use log::trace;

use crate::check::check_empty;
use crate::error::Result;
use crate::matcher::{MatchMode, Matcher};
use crate::resolve::resolve_index;

/// One end of a range window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boundary {
    /// A literal position. Negative values count from the end of the sequence.
    Literal(i64),
    /// Patterns to search for; a match on any of them fixes the position.
    Patterns(Vec<String>),
}

impl Boundary {
    /// Creates a pattern boundary.
    ///
    /// Fails with [`crate::ValidationError::EmptyValue`] when `patterns` is empty.
    pub fn patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        check_empty(&patterns, "patterns", "")?;
        Ok(Boundary::Patterns(patterns))
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Boundary::Literal(0)
    }
}

impl From<i64> for Boundary {
    fn from(index: i64) -> Self {
        Boundary::Literal(index)
    }
}

impl From<i32> for Boundary {
    fn from(index: i32) -> Self {
        Boundary::Literal(i64::from(index))
    }
}

impl From<usize> for Boundary {
    fn from(index: usize) -> Self {
        Boundary::Literal(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Boundary {
    fn from(pattern: &str) -> Self {
        Boundary::Patterns(vec![pattern.to_string()])
    }
}

impl From<String> for Boundary {
    fn from(pattern: String) -> Self {
        Boundary::Patterns(vec![pattern])
    }
}

/// A boundary ready for resolution.
#[derive(Debug, Clone)]
enum Anchor {
    Literal(i64),
    Match(Matcher),
}

impl Anchor {
    fn compile(boundary: Boundary, mode: MatchMode) -> Result<Self> {
        match boundary {
            Boundary::Literal(index) => Ok(Anchor::Literal(index)),
            Boundary::Patterns(patterns) => {
                check_empty(&patterns, "patterns", "")?;
                Ok(Anchor::Match(Matcher::build(mode, patterns)?))
            }
        }
    }

    fn boundary(&self) -> Boundary {
        match self {
            Anchor::Literal(index) => Boundary::Literal(*index),
            Anchor::Match(matcher) => {
                Boundary::Patterns(matcher.patterns().into_iter().map(String::from).collect())
            }
        }
    }
}

/// Keeps the items between a start and an end boundary.
///
/// Construct with [`RangeFilter::builder`]; pattern boundaries are compiled
/// by [`RangeFilterBuilder::build`], so applying a built filter never fails.
///
/// # Example
///
/// ```
/// use sift_filter::RangeFilter;
///
/// let lines = ["h1", "START", "x", "y", "END", "z"];
/// let range = RangeFilter::builder().start("START").end("END").build().unwrap();
///
/// assert_eq!(range.apply(&lines), &["START", "x", "y"]);
/// ```
#[derive(Debug, Clone)]
pub struct RangeFilter {
    start: Anchor,
    end: Anchor,
    include_end: bool,
    mode: MatchMode,
}

impl RangeFilter {
    /// Starts building a range filter. Defaults select the whole sequence.
    pub fn builder() -> RangeFilterBuilder {
        RangeFilterBuilder::default()
    }

    /// Returns the start boundary.
    pub fn start(&self) -> Boundary {
        self.start.boundary()
    }

    /// Returns the end boundary.
    pub fn end(&self) -> Boundary {
        self.end.boundary()
    }

    /// Returns whether the end item is part of the window.
    pub fn include_end(&self) -> bool {
        self.include_end
    }

    /// Returns the match mode used by pattern boundaries.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Resolves the start and end positions against `items`.
    ///
    /// The end is returned before `include_end` is applied. Literal values
    /// are returned as given, so they may be negative or out of range.
    pub fn resolve<S: AsRef<str>>(&self, items: &[S]) -> (i64, i64) {
        let len = len_i64(items.len());

        let start = match &self.start {
            Anchor::Literal(index) => *index,
            Anchor::Match(matcher) => len_i64(resolve_index(items, matcher, false, 0)),
        };

        let end = match &self.end {
            Anchor::Literal(0) => len,
            Anchor::Literal(index) => *index,
            Anchor::Match(matcher) => len_i64(resolve_index(items, matcher, true, items.len())),
        };

        trace!("range resolved to start={start} end={end} over {len} items");
        (start, end)
    }

    /// Returns the window of `items` selected by this filter.
    ///
    /// Out-of-range or inverted bounds yield an empty slice.
    pub fn apply<'a, S: AsRef<str>>(&self, items: &'a [S]) -> &'a [S] {
        let (start, end) = self.resolve(items);
        let stop = end.saturating_add(i64::from(self.include_end));
        &items[slice_range(items.len(), start, stop)]
    }
}

/// Builder for [`RangeFilter`].
#[derive(Debug, Clone, Default)]
pub struct RangeFilterBuilder {
    start: Boundary,
    end: Boundary,
    include_end: bool,
    mode: MatchMode,
}

impl RangeFilterBuilder {
    /// Sets the start boundary.
    pub fn start(mut self, start: impl Into<Boundary>) -> Self {
        self.start = start.into();
        self
    }

    /// Sets the end boundary. A literal `0` means "to the end".
    pub fn end(mut self, end: impl Into<Boundary>) -> Self {
        self.end = end.into();
        self
    }

    /// Sets whether the end item is kept.
    pub fn include_end(mut self, include_end: bool) -> Self {
        self.include_end = include_end;
        self
    }

    /// Sets the match mode for pattern boundaries.
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Switches pattern boundaries to regex matching.
    pub fn regex(self) -> Self {
        self.mode(MatchMode::Regex)
    }

    /// Validates the boundaries and compiles their patterns.
    pub fn build(self) -> Result<RangeFilter> {
        Ok(RangeFilter {
            start: Anchor::compile(self.start, self.mode)?,
            end: Anchor::compile(self.end, self.mode)?,
            include_end: self.include_end,
            mode: self.mode,
        })
    }
}

/// Returns the window of `items` selected by `range`.
///
/// Free-function form of [`RangeFilter::apply`].
pub fn apply_range<'a, S: AsRef<str>>(items: &'a [S], range: &RangeFilter) -> &'a [S] {
    range.apply(items)
}

/// Converts slice bounds that may be negative or out of range into a valid
/// `Range` over a sequence of length `len`.
///
/// Negative bounds are offset by `len`, everything is clamped to `0..=len`,
/// and an inverted pair becomes an empty range.
fn slice_range(len: usize, start: i64, stop: i64) -> Range<usize> {
    let len_i = len_i64(len);
    let clamp = |bound: i64| {
        let bound = if bound < 0 { bound.saturating_add(len_i) } else { bound };
        // Clamped to 0..=len, so the cast is lossless.
        bound.clamp(0, len_i) as usize
    };

    let start = clamp(start);
    let stop = clamp(stop);
    if start >= stop {
        0..0
    } else {
        start..stop
    }
}

fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
