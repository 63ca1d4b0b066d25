//! Recursive transforms over YAML value trees.
//!
//! A tree is made of scalars, sequences, and mappings. [`transform`] walks
//! the containers and rewrites selected children; [`compact`] strips entries
//! that carry no information before a document is written back to disk.

use serde_yaml::{Mapping, Value};

/// Rewrites the children of `value`.
///
/// For every element of a sequence and every value of a mapping: if
/// `predicate` accepts it, it is replaced by `handler(child)`; otherwise the
/// walk descends into it. Handled children are not descended into. A scalar
/// passed as `value` is returned unchanged, as is a tagged value.
///
/// ```
/// use serde_yaml::Value;
/// use sift_files::tree::transform;
///
/// let doc: Value = serde_yaml::from_str("a: [1, x, [2]]").unwrap();
/// let out = transform(doc, &|v: &Value| v.is_number(), &|_: Value| Value::from("n"));
/// assert_eq!(out, serde_yaml::from_str::<Value>("a: [n, x, [n]]").unwrap());
/// ```
pub fn transform<P, H>(value: Value, predicate: &P, handler: &H) -> Value
where
    P: Fn(&Value) -> bool,
    H: Fn(Value) -> Value,
{
    let visit = |child: Value| {
        if predicate(&child) {
            handler(child)
        } else {
            transform(child, predicate, handler)
        }
    };

    match value {
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(visit).collect()),
        Value::Mapping(map) => Value::Mapping(map.into_iter().map(|(k, v)| (k, visit(v))).collect()),
        other => other,
    }
}

/// Removes mapping entries that are null or equal to their default.
///
/// `defaults` mirrors the shape of `value`: an entry is dropped when it is
/// null, or when `defaults` holds an equal value under the same key. Nested
/// mappings are compacted against the nested default and kept even when
/// nothing is left in them. Sequences are compacted element by element
/// without defaults.
pub fn compact(value: Value, defaults: &Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut out = Mapping::new();
            for (key, entry) in map {
                if entry.is_null() {
                    continue;
                }
                let default = defaults.get(&key).unwrap_or(&Value::Null);
                if !default.is_null() && &entry == default {
                    continue;
                }
                out.insert(key, compact(entry, default));
            }
            Value::Mapping(out)
        }
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| compact(item, &Value::Null))
                .collect(),
        ),
        other => other,
    }
}
