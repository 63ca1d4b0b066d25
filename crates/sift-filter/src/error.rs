//! Error types for the filter crate.

use thiserror::Error;

/// Invariant violations detected while constructing filters.
///
/// These mirror the checks in [`crate::check`]; every constructor in this
/// crate reports its failures through one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required argument was absent.
    #[error("Missing required argument: {name}. {msg}")]
    MissingRequired { name: String, msg: String },

    /// Several required arguments were absent.
    #[error("Missing required arguments: [{}]. {msg}", quoted(.names))]
    MissingRequiredMultiple { names: Vec<String>, msg: String },

    /// A collection that must hold at least one element was empty.
    #[error("Value is empty: {name}. {msg}")]
    EmptyValue { name: String, msg: String },

    /// None of a group of alternatives was supplied.
    #[error("At least one of [{}] is required.", quoted(.names))]
    AtLeastOne { names: Vec<String> },

    /// More than one of a group of mutually exclusive alternatives was supplied.
    #[error("None or only one of [{}] is required.", quoted(.names))]
    AtMostOne { names: Vec<String> },

    /// Values that must be unique contained duplicates.
    #[error("All values must be unique. Duplicated values: [{}]. {msg}", quoted(.values))]
    Duplicated { values: Vec<String>, msg: String },
}

/// Errors that can occur when building filters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A filter was built from arguments that break its invariants.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl FilterError {
    /// Returns `true` for validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, FilterError::Validation(_))
    }

    /// Returns `true` for regex compilation failures.
    pub fn is_pattern(&self) -> bool {
        matches!(self, FilterError::Pattern { .. })
    }
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("\"{n}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
