//! File and value-tree helpers for sift.
//!
//! - [`file`]: YAML read/write with create-if-absent, YAML tables to CSV
//! - [`tree`]: recursive transforms over [`serde_yaml::Value`] trees
//! - [`wait`]: pauses around a unit of work
//!
//! None of these depend on the filter engine; the `sift` crate uses them to
//! load and store filter specifications.

mod error;
pub mod file;
pub mod tree;
pub mod wait;

pub use error::{FileError, Result};
pub use file::{read_or_create_yaml, read_yaml, write_yaml, yaml_to_csv};
pub use tree::{compact, transform};
pub use wait::waits;
