//! Filter specification: a validated combination of sub-filters.

use crate::check::check_at_least_one;
use crate::error::Result;
use crate::existence::ExistenceFilter;
use crate::range::RangeFilter;

/// A combination of at most one range, include, and exclude filter.
///
/// At least one sub-filter must be present. The check runs once, when the
/// spec is built; a constructed `FilterSpec` is always valid.
///
/// Stages are applied in a fixed order by [`crate::filter_sequence`]:
///
/// ```text
/// range  →  include (keep matches)  →  exclude (drop matches)
/// ```
///
/// # Example
///
/// ```
/// use sift_filter::{ExistenceFilter, FilterSpec, RangeFilter};
///
/// let spec = FilterSpec::builder()
///     .range(RangeFilter::builder().start("BEGIN").build().unwrap())
///     .exclude(ExistenceFilter::occurrence(["DEBUG"]).unwrap())
///     .build()
///     .unwrap();
///
/// let lines = ["boot", "BEGIN", "DEBUG x", "INFO y"];
/// assert_eq!(spec.apply(&lines), vec![&"BEGIN", &"INFO y"]);
/// ```
#[derive(Debug, Clone)]
pub struct FilterSpec {
    range: Option<RangeFilter>,
    include: Option<ExistenceFilter>,
    exclude: Option<ExistenceFilter>,
}

impl FilterSpec {
    /// Creates a spec from optional sub-filters.
    ///
    /// Fails with [`crate::ValidationError::AtLeastOne`] when all three are `None`.
    pub fn new(
        range: Option<RangeFilter>,
        include: Option<ExistenceFilter>,
        exclude: Option<ExistenceFilter>,
    ) -> Result<Self> {
        check_at_least_one(&[
            ("range", range.is_some()),
            ("include", include.is_some()),
            ("exclude", exclude.is_some()),
        ])?;

        Ok(FilterSpec {
            range,
            include,
            exclude,
        })
    }

    /// Starts building a spec.
    pub fn builder() -> FilterSpecBuilder {
        FilterSpecBuilder::default()
    }

    /// Returns the range filter, if any.
    pub fn range(&self) -> Option<&RangeFilter> {
        self.range.as_ref()
    }

    /// Returns the include filter, if any.
    pub fn include(&self) -> Option<&ExistenceFilter> {
        self.include.as_ref()
    }

    /// Returns the exclude filter, if any.
    pub fn exclude(&self) -> Option<&ExistenceFilter> {
        self.exclude.as_ref()
    }
}

/// Builder for [`FilterSpec`].
#[derive(Debug, Clone, Default)]
pub struct FilterSpecBuilder {
    range: Option<RangeFilter>,
    include: Option<ExistenceFilter>,
    exclude: Option<ExistenceFilter>,
}

impl FilterSpecBuilder {
    /// Sets the range filter.
    pub fn range(mut self, range: RangeFilter) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets the include filter.
    pub fn include(mut self, include: ExistenceFilter) -> Self {
        self.include = Some(include);
        self
    }

    /// Sets the exclude filter.
    pub fn exclude(mut self, exclude: ExistenceFilter) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Validates and finalizes the spec.
    pub fn build(self) -> Result<FilterSpec> {
        FilterSpec::new(self.range, self.include, self.exclude)
    }
}
