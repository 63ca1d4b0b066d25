//! Pattern matching for filter predicates.
//!
//! A [`Matcher`] owns a compiled, ordered set of patterns and answers whether
//! an item matches one of them. How a pattern matches is decided by the
//! [`MatchMode`]:
//!
//! - **Occurrence**: the pattern occurs as a substring of the item
//! - **Regex**: the regular expression matches at the start of the item
//!
//! Regex patterns are compiled when the matcher is built, so an invalid
//! expression is reported before any item is scanned.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{FilterError, Result};

/// How a pattern is tested against an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Literal substring containment. The empty pattern matches every item.
    #[default]
    Occurrence,
    /// Regular expression anchored at the start of the item.
    ///
    /// This is a prefix match, not a full-string match: `ab` matches `abc`.
    Regex,
}

impl MatchMode {
    /// Selects [`MatchMode::Regex`] when `use_regex` is set.
    pub fn from_regex_flag(use_regex: bool) -> Self {
        if use_regex {
            MatchMode::Regex
        } else {
            MatchMode::Occurrence
        }
    }

    /// Returns `true` for [`MatchMode::Regex`].
    pub fn is_regex(self) -> bool {
        matches!(self, MatchMode::Regex)
    }

    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Occurrence => "occurrence",
            MatchMode::Regex => "regex",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single compiled pattern.
#[derive(Debug, Clone)]
enum Compiled {
    Occurrence(String),
    Regex { source: String, regex: Regex },
}

impl Compiled {
    fn source(&self) -> &str {
        match self {
            Compiled::Occurrence(s) => s,
            Compiled::Regex { source, .. } => source,
        }
    }

    fn is_match(&self, item: &str) -> bool {
        match self {
            Compiled::Occurrence(pattern) => item.contains(pattern.as_str()),
            Compiled::Regex { regex, .. } => regex.find(item).is_some_and(|m| m.start() == 0),
        }
    }
}

/// An ordered set of patterns compiled for one [`MatchMode`].
///
/// # Example
///
/// ```
/// use sift_filter::{Matcher, MatchMode};
///
/// let matcher = Matcher::build(MatchMode::Regex, ["ERR", r"\d+"]).unwrap();
/// assert!(matcher.matches_any("ERROR: disk full"));
/// assert!(matcher.matches_any("404 not found"));
/// assert!(!matcher.matches_any("status 404"));
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    mode: MatchMode,
    patterns: Vec<Compiled>,
}

impl Matcher {
    /// Compiles `patterns` for `mode`.
    ///
    /// In regex mode each distinct pattern is compiled once; repeated
    /// patterns share the first compilation. Returns
    /// [`FilterError::Pattern`] for the first pattern that does not compile.
    pub fn build<I, S>(mode: MatchMode, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: Vec<String> = patterns.into_iter().map(Into::into).collect();

        let patterns = match mode {
            MatchMode::Occurrence => sources.into_iter().map(Compiled::Occurrence).collect(),
            MatchMode::Regex => {
                let mut cache: HashMap<String, Regex> = HashMap::new();
                let mut compiled = Vec::with_capacity(sources.len());
                for source in sources {
                    let regex = match cache.get(&source) {
                        Some(regex) => regex.clone(),
                        None => {
                            let regex = compile(&source)?;
                            cache.insert(source.clone(), regex.clone());
                            regex
                        }
                    };
                    compiled.push(Compiled::Regex { source, regex });
                }
                compiled
            }
        };

        Ok(Matcher { mode, patterns })
    }

    /// Returns the match mode this matcher was built for.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the matcher holds no patterns.
    ///
    /// An empty matcher never matches.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the pattern sources in their original order.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(Compiled::source).collect()
    }

    /// Tests `item` against the pattern at `index`.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn is_match(&self, item: &str, index: usize) -> bool {
        self.patterns
            .get(index)
            .is_some_and(|pattern| pattern.is_match(item))
    }

    /// Returns `true` if `item` matches at least one pattern.
    pub fn matches_any(&self, item: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(item))
    }
}

/// Builds a [`Matcher`] for `mode` over `patterns`.
///
/// Shorthand for [`Matcher::build`].
pub fn build_matcher<I, S>(mode: MatchMode, patterns: I) -> Result<Matcher>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Matcher::build(mode, patterns)
}

/// Compiles `source` as written.
///
/// The text is never wrapped, so inline flags and `(?x)` comments reach the
/// end of the pattern unchanged. Anchoring happens at match time.
fn compile(source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|err| FilterError::Pattern {
        pattern: source.to_string(),
        source: err,
    })
}
