//! The filtering pipeline.
//!
//! Stages run in a fixed order, each consuming the previous stage's output:
//!
//! 1. **Range**: narrow the sequence to a window
//! 2. **Include**: keep items matching the include patterns
//! 3. **Exclude**: drop items matching the exclude patterns
//!
//! Include runs before exclude, so an item matched by both is dropped.

use log::debug;

use crate::spec::FilterSpec;

/// Filters `items` through `spec`, returning references to the survivors.
///
/// With no spec every item is returned. The result never contains an item
/// that is not in `items` and never reorders items.
pub fn filter_sequence<'a, S: AsRef<str>>(items: &'a [S], spec: Option<&FilterSpec>) -> Vec<&'a S> {
    match spec {
        Some(spec) => spec.apply(items),
        None => items.iter().collect(),
    }
}

/// Filters and clones the surviving items.
pub fn filter_cloned<S: AsRef<str> + Clone>(items: &[S], spec: Option<&FilterSpec>) -> Vec<S> {
    filter_sequence(items, spec).into_iter().cloned().collect()
}

impl FilterSpec {
    /// Runs the pipeline over `items`.
    pub fn apply<'a, S: AsRef<str>>(&self, items: &'a [S]) -> Vec<&'a S> {
        let window = match self.range() {
            Some(range) => {
                let window = range.apply(items);
                debug!("range stage kept {} of {} items", window.len(), items.len());
                window
            }
            None => items,
        };

        let mut survivors: Vec<&'a S> = window.iter().collect();

        if let Some(include) = self.include() {
            let before = survivors.len();
            include.retain(&mut survivors, true);
            debug!("include stage kept {} of {} items", survivors.len(), before);
        }

        if let Some(exclude) = self.exclude() {
            let before = survivors.len();
            exclude.retain(&mut survivors, false);
            debug!("exclude stage kept {} of {} items", survivors.len(), before);
        }

        survivors
    }

    /// Runs the pipeline and clones the surviving items.
    pub fn apply_cloned<S: AsRef<str> + Clone>(&self, items: &[S]) -> Vec<S> {
        self.apply(items).into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::existence::ExistenceFilter;
    use crate::range::RangeFilter;

    fn log_lines() -> Vec<String> {
        [
            "boot",
            "=== run ===",
            "INFO start",
            "DEBUG tick",
            "WARN slow",
            "DEBUG tick",
            "ERROR boom",
            "=== end ===",
            "shutdown",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn no_spec_is_identity() {
        let items = log_lines();
        assert_eq!(filter_cloned(&items, None), items);
    }

    #[test]
    fn range_only() {
        let items = log_lines();
        let spec = FilterSpec::builder()
            .range(RangeFilter::builder().start("===").end("===").build().unwrap())
            .build()
            .unwrap();

        let result = filter_sequence(&items, Some(&spec));
        assert_eq!(result.len(), 6);
        assert_eq!(result[0], "=== run ===");
        assert_eq!(result[5], "ERROR boom");
    }

    #[test]
    fn range_then_include_then_exclude() {
        let items = log_lines();
        let spec = FilterSpec::builder()
            .range(
                RangeFilter::builder()
                    .start("=== run")
                    .end("=== end")
                    .build()
                    .unwrap(),
            )
            .include(ExistenceFilter::regex(["[A-Z]+ "]).unwrap())
            .exclude(ExistenceFilter::occurrence(["DEBUG"]).unwrap())
            .build()
            .unwrap();

        assert_eq!(
            spec.apply_cloned(&items),
            vec!["INFO start", "WARN slow", "ERROR boom"]
        );
    }

    #[test]
    fn exclude_wins_over_include() {
        let items = log_lines();
        let spec = FilterSpec::builder()
            .include(ExistenceFilter::occurrence(["ERROR"]).unwrap())
            .exclude(ExistenceFilter::occurrence(["boom"]).unwrap())
            .build()
            .unwrap();

        assert!(filter_sequence(&items, Some(&spec)).is_empty());
    }

    #[test]
    fn range_narrows_before_include() {
        // "boot" would match the include pattern but lies outside the window.
        let items = log_lines();
        let spec = FilterSpec::builder()
            .range(RangeFilter::builder().start(1).build().unwrap())
            .include(ExistenceFilter::occurrence(["boot", "shutdown"]).unwrap())
            .build()
            .unwrap();

        assert_eq!(spec.apply_cloned(&items), vec!["shutdown"]);
    }

    #[test]
    fn empty_input() {
        let items: Vec<&str> = Vec::new();
        let spec = FilterSpec::builder()
            .range(RangeFilter::builder().start("a").end("b").build().unwrap())
            .include(ExistenceFilter::occurrence(["a"]).unwrap())
            .build()
            .unwrap();

        assert!(filter_sequence(&items, Some(&spec)).is_empty());
    }
}
