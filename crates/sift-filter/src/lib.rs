//! Sift filter - Declarative filtering for ordered string lists.
//!
//! Given an ordered list of strings (log lines, config keys, changelog
//! entries) and a [`FilterSpec`], sift produces the items that satisfy it.
//! A spec combines up to three stages:
//!
//! - **Range**: keep the window between two boundaries, each a literal index
//!   or a set of marker patterns
//! - **Include**: keep items matching any of a set of patterns
//! - **Exclude**: drop items matching any of a set of patterns
//!
//! # Quick Start
//!
//! ```rust
//! use sift_filter::{filter_sequence, ExistenceFilter, FilterSpec, RangeFilter};
//!
//! let lines = vec![
//!     "header",
//!     "START",
//!     "INFO ready",
//!     "DEBUG poll",
//!     "ERROR failed",
//!     "END",
//!     "footer",
//! ];
//!
//! let spec = FilterSpec::builder()
//!     .range(RangeFilter::builder().start("START").end("END").build()?)
//!     .exclude(ExistenceFilter::occurrence(["DEBUG"])?)
//!     .build()?;
//!
//! let result = filter_sequence(&lines, Some(&spec));
//! assert_eq!(result, vec![&"START", &"INFO ready", &"ERROR failed"]);
//! # Ok::<(), sift_filter::FilterError>(())
//! ```
//!
//! # Matching
//!
//! | Mode | A pattern matches an item when |
//! |------|--------------------------------|
//! | [`MatchMode::Occurrence`] | the pattern is a substring of the item |
//! | [`MatchMode::Regex`] | the expression matches at the start of the item |
//!
//! # Validation
//!
//! All checks run when filters are constructed: empty pattern lists, specs
//! without any stage, and regexes that do not compile are rejected with a
//! [`FilterError`]. Applying a constructed filter cannot fail; bad or
//! inverted range bounds produce an empty result.

pub mod check;
mod error;
mod existence;
mod matcher;
mod pipeline;
mod range;
mod resolve;
mod spec;

// Re-export public API
pub use error::{FilterError, Result, ValidationError};
pub use existence::{apply_existence, ExistenceFilter};
pub use matcher::{build_matcher, MatchMode, Matcher};
pub use pipeline::{filter_cloned, filter_sequence};
pub use range::{apply_range, Boundary, RangeFilter, RangeFilterBuilder};
pub use resolve::{find_index, resolve_index};
pub use spec::{FilterSpec, FilterSpecBuilder};
