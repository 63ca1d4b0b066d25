//! # Sift - Range and Pattern Filtering for Line Lists
//!
//! Sift keeps the parts of an ordered list of lines that you care about: the
//! window between two markers, narrowed by include and exclude patterns.
//!
//! This crate bundles the pieces:
//!
//! - the filtering engine from [`sift_filter`], re-exported at the root
//! - [`config`]: the YAML document format for filter specs
//! - [`files`]: YAML/CSV file helpers from [`sift_files`]
//! - [`cli`]: the `sift` command-line tool
//!
//! ## Quick Start
//!
//! ```rust
//! use sift::config::parse_spec;
//! use sift::filter_sequence;
//!
//! let spec = parse_spec(
//!     "range: {start: '## 1.2.0', end: '## '}\nexclude: {patterns: ['chore:']}",
//! )?;
//!
//! let changelog = [
//!     "## 1.2.0",
//!     "- feat: faster scans",
//!     "- chore: bump deps",
//!     "## 1.1.0",
//!     "- fix: empty input",
//! ];
//!
//! let lines = filter_sequence(&changelog, Some(&spec));
//! assert_eq!(lines, vec![&"## 1.2.0", &"- feat: faster scans"]);
//! # Ok::<(), sift::config::ConfigError>(())
//! ```

pub mod cli;
pub mod config;

pub use sift_files as files;

// Engine re-exports
pub use sift_filter::{
    apply_existence, apply_range, build_matcher, check, filter_cloned, filter_sequence,
    find_index, resolve_index, Boundary, ExistenceFilter, FilterError, FilterSpec,
    FilterSpecBuilder, MatchMode, Matcher, RangeFilter, RangeFilterBuilder, Result,
    ValidationError,
};
