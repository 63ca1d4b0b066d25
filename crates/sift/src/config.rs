//! YAML configuration format for filter specs.
//!
//! The `*Config` types mirror the document layout and carry no invariants;
//! converting them into engine types with `TryFrom` runs every check.
//!
//! ```yaml
//! range:
//!   start: "START"        # index | pattern | [patterns], default 0
//!   end: ["END", "FIN"]   # index | pattern | [patterns], default 0 (= to the end)
//!   include_end: false
//!   use_regex: false
//! include:
//!   patterns: ["ERROR", "WARN"]
//! exclude:
//!   patterns: ["noise"]
//!   use_regex: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use sift_files::{compact, read_yaml, write_yaml, FileError};
use sift_filter::{
    Boundary, ExistenceFilter, FilterError, FilterSpec, MatchMode, RangeFilter,
};
use thiserror::Error;

/// Errors that can occur while loading or saving filter specs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file exists but holds no document.
    #[error("filter spec file {} is empty", path.display())]
    Missing { path: PathBuf },

    /// The document parsed but describes an invalid spec.
    #[error("invalid filter spec in {}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: FilterError,
    },

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// A range boundary as written in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundaryConfig {
    Index(i64),
    Pattern(String),
    Patterns(Vec<String>),
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        BoundaryConfig::Index(0)
    }
}

impl TryFrom<BoundaryConfig> for Boundary {
    type Error = FilterError;

    fn try_from(config: BoundaryConfig) -> Result<Self, Self::Error> {
        match config {
            BoundaryConfig::Index(index) => Ok(Boundary::Literal(index)),
            BoundaryConfig::Pattern(pattern) => Ok(Boundary::from(pattern)),
            BoundaryConfig::Patterns(patterns) => Boundary::patterns(patterns),
        }
    }
}

impl From<Boundary> for BoundaryConfig {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Literal(index) => BoundaryConfig::Index(index),
            Boundary::Patterns(mut patterns) if patterns.len() == 1 => {
                BoundaryConfig::Pattern(patterns.remove(0))
            }
            Boundary::Patterns(patterns) => BoundaryConfig::Patterns(patterns),
        }
    }
}

/// The `range` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    #[serde(default)]
    pub start: BoundaryConfig,
    #[serde(default)]
    pub end: BoundaryConfig,
    #[serde(default)]
    pub include_end: bool,
    #[serde(default)]
    pub use_regex: bool,
}

impl TryFrom<RangeConfig> for RangeFilter {
    type Error = FilterError;

    fn try_from(config: RangeConfig) -> Result<Self, Self::Error> {
        RangeFilter::builder()
            .start(Boundary::try_from(config.start)?)
            .end(Boundary::try_from(config.end)?)
            .include_end(config.include_end)
            .mode(MatchMode::from_regex_flag(config.use_regex))
            .build()
    }
}

impl From<&RangeFilter> for RangeConfig {
    fn from(range: &RangeFilter) -> Self {
        RangeConfig {
            start: range.start().into(),
            end: range.end().into(),
            include_end: range.include_end(),
            use_regex: range.mode().is_regex(),
        }
    }
}

/// The `include` and `exclude` sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExistenceConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub use_regex: bool,
}

impl TryFrom<ExistenceConfig> for ExistenceFilter {
    type Error = FilterError;

    fn try_from(config: ExistenceConfig) -> Result<Self, Self::Error> {
        ExistenceFilter::new(config.patterns, MatchMode::from_regex_flag(config.use_regex))
    }
}

impl From<&ExistenceFilter> for ExistenceConfig {
    fn from(filter: &ExistenceFilter) -> Self {
        ExistenceConfig {
            patterns: filter.patterns().into_iter().map(String::from).collect(),
            use_regex: filter.mode().is_regex(),
        }
    }
}

/// A whole spec document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecConfig {
    #[serde(default)]
    pub range: Option<RangeConfig>,
    #[serde(default)]
    pub include: Option<ExistenceConfig>,
    #[serde(default)]
    pub exclude: Option<ExistenceConfig>,
}

impl TryFrom<SpecConfig> for FilterSpec {
    type Error = FilterError;

    fn try_from(config: SpecConfig) -> Result<Self, Self::Error> {
        FilterSpec::new(
            config.range.map(RangeFilter::try_from).transpose()?,
            config.include.map(ExistenceFilter::try_from).transpose()?,
            config.exclude.map(ExistenceFilter::try_from).transpose()?,
        )
    }
}

impl From<&FilterSpec> for SpecConfig {
    fn from(spec: &FilterSpec) -> Self {
        SpecConfig {
            range: spec.range().map(RangeConfig::from),
            include: spec.include().map(ExistenceConfig::from),
            exclude: spec.exclude().map(ExistenceConfig::from),
        }
    }
}

/// Parses and validates a spec from YAML text.
pub fn parse_spec(text: &str) -> Result<FilterSpec, ConfigError> {
    let config: SpecConfig = serde_yaml::from_str(text)?;
    Ok(FilterSpec::try_from(config)?)
}

/// Loads and validates a spec file.
pub fn load_spec(path: impl AsRef<Path>) -> Result<FilterSpec, ConfigError> {
    let path = path.as_ref();
    let config: SpecConfig = read_yaml(path)?.ok_or_else(|| ConfigError::Missing {
        path: path.to_path_buf(),
    })?;

    FilterSpec::try_from(config).map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Converts a spec to its minimal document form.
///
/// Sections that are present are always written, but settings equal to
/// their defaults are left out.
pub fn spec_to_value(spec: &FilterSpec) -> Result<Value, ConfigError> {
    let config = SpecConfig::from(spec);
    let mut doc = Mapping::new();

    if let Some(range) = &config.range {
        let section = compact(serde_yaml::to_value(range)?, &range_defaults());
        doc.insert("range".into(), section);
    }
    for (name, section) in [("include", &config.include), ("exclude", &config.exclude)] {
        if let Some(section) = section {
            let section = compact(serde_yaml::to_value(section)?, &existence_defaults());
            doc.insert(name.into(), section);
        }
    }

    Ok(Value::Mapping(doc))
}

/// Renders a spec as a minimal YAML document.
pub fn render_spec(spec: &FilterSpec) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(&spec_to_value(spec)?)?)
}

/// Writes a spec to `path` as a minimal YAML document.
pub fn save_spec(path: impl AsRef<Path>, spec: &FilterSpec) -> Result<(), ConfigError> {
    write_yaml(path, &spec_to_value(spec)?)?;
    Ok(())
}

fn range_defaults() -> Value {
    let mut map = Mapping::new();
    map.insert("start".into(), 0.into());
    map.insert("end".into(), 0.into());
    map.insert("include_end".into(), false.into());
    map.insert("use_regex".into(), false.into());
    Value::Mapping(map)
}

fn existence_defaults() -> Value {
    let mut map = Mapping::new();
    map.insert("use_regex".into(), false.into());
    Value::Mapping(map)
}
