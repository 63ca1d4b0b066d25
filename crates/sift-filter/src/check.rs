//! Argument assertion helpers.
//!
//! Each helper returns `Ok(())` when its condition holds and the matching
//! [`ValidationError`] otherwise. Filter constructors use them so that every
//! invariant violation is reported the same way.
//!
//! Presence checks take `(name, present)` pairs so callers can mix arguments
//! of different types:
//!
//! ```
//! use sift_filter::check::check_at_least_one;
//!
//! let start: Option<usize> = None;
//! let pattern: Option<&str> = Some("ERROR");
//! assert!(check_at_least_one(&[("start", start.is_some()), ("pattern", pattern.is_some())]).is_ok());
//! ```

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ValidationError;

/// Fails with [`ValidationError::MissingRequired`] when `value` is `None`.
pub fn check_required<T>(value: Option<&T>, name: &str, msg: &str) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingRequired {
            name: name.to_string(),
            msg: msg.to_string(),
        }),
    }
}

/// Fails with [`ValidationError::MissingRequiredMultiple`] naming every absent argument.
pub fn check_required_multiple(args: &[(&str, bool)], msg: &str) -> Result<(), ValidationError> {
    let missing: Vec<String> = args
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredMultiple {
            names: missing,
            msg: msg.to_string(),
        })
    }
}

/// Fails with [`ValidationError::EmptyValue`] when `items` is empty.
pub fn check_empty<T>(items: &[T], name: &str, msg: &str) -> Result<(), ValidationError> {
    if items.is_empty() {
        Err(ValidationError::EmptyValue {
            name: name.to_string(),
            msg: msg.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Fails with [`ValidationError::AtLeastOne`] when no argument is present.
pub fn check_at_least_one(args: &[(&str, bool)]) -> Result<(), ValidationError> {
    if args.iter().any(|(_, present)| *present) {
        Ok(())
    } else {
        Err(ValidationError::AtLeastOne {
            names: names_of(args),
        })
    }
}

/// Fails with [`ValidationError::AtMostOne`] when more than one argument is present.
pub fn check_at_most_one(args: &[(&str, bool)]) -> Result<(), ValidationError> {
    if args.iter().filter(|(_, present)| *present).count() <= 1 {
        Ok(())
    } else {
        Err(ValidationError::AtMostOne {
            names: names_of(args),
        })
    }
}

/// Fails with [`ValidationError::Duplicated`] when `values` contains repeats.
///
/// Each duplicated value is reported once, in the order its first repeat
/// was seen.
pub fn check_unique<T>(values: &[T], msg: &str) -> Result<(), ValidationError>
where
    T: Eq + Hash + Debug,
{
    report_duplicates(duplicates(values.iter()), msg)
}

/// Like [`check_unique`], comparing the key extracted from each value.
pub fn check_unique_by<T, K, F>(values: &[T], key: F, msg: &str) -> Result<(), ValidationError>
where
    K: Eq + Hash + Debug,
    F: Fn(&T) -> K,
{
    report_duplicates(duplicates(values.iter().map(key)), msg)
}

fn duplicates<K>(keys: impl IntoIterator<Item = K>) -> Vec<String>
where
    K: Eq + Hash + Debug,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicated = Vec::new();

    for k in keys {
        if seen.contains(&k) {
            let rendered = format!("{k:?}");
            if reported.insert(rendered.clone()) {
                duplicated.push(rendered);
            }
        } else {
            seen.insert(k);
        }
    }

    duplicated
}

fn report_duplicates(duplicated: Vec<String>, msg: &str) -> Result<(), ValidationError> {
    if duplicated.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Duplicated {
            values: duplicated,
            msg: msg.to_string(),
        })
    }
}

fn names_of(args: &[(&str, bool)]) -> Vec<String> {
    args.iter().map(|(name, _)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required() {
        assert!(check_required(Some(&1), "x", "").is_ok());
        let err = check_required::<i32>(None, "x", "needed").unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: x. needed");
    }

    #[test]
    fn required_multiple_names_missing_only() {
        assert!(check_required_multiple(&[("a", true), ("b", true)], "").is_ok());

        let err = check_required_multiple(&[("a", true), ("b", false), ("c", false)], "")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequiredMultiple {
                names: vec!["b".into(), "c".into()],
                msg: String::new(),
            }
        );
        assert_eq!(err.to_string(), r#"Missing required arguments: ["b", "c"]. "#);
    }

    #[test]
    fn empty() {
        assert!(check_empty(&[1], "xs", "").is_ok());
        assert!(matches!(
            check_empty::<i32>(&[], "xs", ""),
            Err(ValidationError::EmptyValue { .. })
        ));
    }

    #[test]
    fn at_least_one() {
        assert!(check_at_least_one(&[("a", false), ("b", true)]).is_ok());
        assert!(check_at_least_one(&[("a", false), ("b", false)]).is_err());
        assert!(check_at_least_one(&[]).is_err());
    }

    #[test]
    fn at_most_one() {
        assert!(check_at_most_one(&[]).is_ok());
        assert!(check_at_most_one(&[("a", false), ("b", false)]).is_ok());
        assert!(check_at_most_one(&[("a", true), ("b", false)]).is_ok());
        assert!(matches!(
            check_at_most_one(&[("a", true), ("b", true)]),
            Err(ValidationError::AtMostOne { .. })
        ));
    }

    #[test]
    fn unique() {
        assert!(check_unique(&["a", "b", "c"], "").is_ok());

        let err = check_unique(&["a", "b", "a", "c", "b", "a"], "").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Duplicated {
                values: vec!["\"a\"".into(), "\"b\"".into()],
                msg: String::new(),
            }
        );
    }

    #[test]
    fn unique_by_key() {
        struct Named {
            name: &'static str,
        }

        let items = [Named { name: "x" }, Named { name: "y" }, Named { name: "x" }];
        let err = check_unique_by(&items, |n| n.name, "names clash").unwrap_err();
        assert!(err.to_string().ends_with("names clash"));
    }
}
