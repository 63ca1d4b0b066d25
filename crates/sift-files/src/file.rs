//! YAML and CSV file helpers.
//!
//! Reading treats an empty document as "no data" rather than an error, which
//! is what a freshly created configuration file contains.

use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::Value;

use crate::error::{FileError, Result};

/// Reads and deserializes a YAML file.
///
/// Returns `Ok(None)` when the file contains only whitespace.
pub fn read_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Option<T>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| FileError::io(path, e))?;
    parse_yaml(&content)
}

/// Reads a YAML file, creating it first if it does not exist.
///
/// Missing parent directories are created. When `default` is given it is
/// written to the new file; otherwise the file is left empty and the read
/// returns `Ok(None)`. An existing file is never modified.
pub fn read_or_create_yaml<T, D>(path: impl AsRef<Path>, default: Option<&D>) -> Result<Option<T>>
where
    T: DeserializeOwned,
    D: Serialize + ?Sized,
{
    let path = path.as_ref();

    if !path.exists() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| FileError::io(parent, e))?;
        }
        match default {
            Some(data) => write_yaml(path, data)?,
            None => fs::write(path, "").map_err(|e| FileError::io(path, e))?,
        }
        info!("created {}", path.display());
    }

    read_yaml(path)
}

/// Serializes `data` as YAML and writes it to `path`, replacing any content.
///
/// Struct fields keep their declaration order.
pub fn write_yaml<D: Serialize + ?Sized>(path: impl AsRef<Path>, data: &D) -> Result<()> {
    let path = path.as_ref();
    let content = serde_yaml::to_string(data)?;
    fs::write(path, content).map_err(|e| FileError::io(path, e))
}

/// Converts a YAML table (a sequence of sequences) into a CSV file.
///
/// Each inner sequence becomes one row; rows may differ in length. Scalars
/// are written in their YAML text form and null becomes an empty cell. An
/// empty document produces an empty CSV file. Every row is checked before
/// `target` is opened, so a rejected document leaves it untouched.
pub fn yaml_to_csv(origin: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
    let rows = match read_yaml::<Value>(origin)? {
        Some(Value::Sequence(rows)) => rows,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(FileError::Shape(format!(
                "expected a sequence of rows, found {}",
                kind_of(&other)
            )))
        }
    };

    let records = rows
        .iter()
        .enumerate()
        .map(|(index, row)| row_to_record(row, index))
        .collect::<Result<Vec<_>>>()?;

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(target.as_ref())?;
    for record in &records {
        writer.write_record(record)?;
    }

    writer
        .flush()
        .map_err(|e| FileError::io(target.as_ref(), e))
}

fn row_to_record(row: &Value, index: usize) -> Result<Vec<String>> {
    let Value::Sequence(cells) = untag(row) else {
        return Err(FileError::Shape(format!(
            "row {index} is a {}, expected a sequence",
            kind_of(row)
        )));
    };
    cells.iter().map(|cell| cell_to_string(cell, index)).collect()
}

fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<Option<T>> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_yaml::from_str(content)?))
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn cell_to_string(cell: &Value, row: usize) -> Result<String> {
    match untag(cell) {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        other => Err(FileError::Shape(format!(
            "row {row} contains a {}, expected scalar cells",
            kind_of(other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Settings {
        name: String,
        limit: u32,
    }

    #[test]
    fn write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yml");
        let settings = Settings {
            name: "sift".into(),
            limit: 3,
        };

        write_yaml(&path, &settings).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name: sift\nlimit: 3\n");

        let back: Option<Settings> = read_yaml(&path).unwrap();
        assert_eq!(back, Some(settings));
    }

    #[test]
    fn read_empty_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.yml");
        fs::write(&path, "  \n").unwrap();

        let value: Option<Settings> = read_yaml(&path).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = read_yaml::<Settings>(dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }

    #[test]
    fn read_or_create_without_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/new.yml");

        let value: Option<Settings> = read_or_create_yaml::<_, Settings>(&path, None).unwrap();
        assert!(value.is_none());
        assert!(path.exists());
    }

    #[test]
    fn read_or_create_with_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.yml");
        let default = Settings {
            name: "default".into(),
            limit: 1,
        };

        let value: Option<Settings> = read_or_create_yaml(&path, Some(&default)).unwrap();
        assert_eq!(value, Some(default));
    }

    #[test]
    fn read_or_create_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("existing.yml");
        fs::write(&path, "name: mine\nlimit: 9\n").unwrap();

        let default = Settings {
            name: "default".into(),
            limit: 1,
        };
        let value: Option<Settings> = read_or_create_yaml(&path, Some(&default)).unwrap();
        assert_eq!(value.map(|s| s.name), Some("mine".to_string()));
    }

    #[test]
    fn csv_from_table() {
        let dir = tempdir().unwrap();
        let origin = dir.path().join("table.yml");
        let target = dir.path().join("table.csv");
        fs::write(&origin, "- [name, count]\n- [alpha, 1]\n- [\"b, c\", ~, true]\n").unwrap();

        yaml_to_csv(&origin, &target).unwrap();
        let csv = fs::read_to_string(&target).unwrap();
        assert_eq!(csv, "name,count\nalpha,1\n\"b, c\",,true\n");
    }

    #[test]
    fn csv_from_empty_document() {
        let dir = tempdir().unwrap();
        let origin = dir.path().join("empty.yml");
        let target = dir.path().join("empty.csv");
        fs::write(&origin, "").unwrap();

        yaml_to_csv(&origin, &target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "");
    }

    #[test]
    fn csv_rejects_mapping_document() {
        let dir = tempdir().unwrap();
        let origin = dir.path().join("map.yml");
        fs::write(&origin, "a: 1\n").unwrap();

        let err = yaml_to_csv(&origin, dir.path().join("out.csv")).unwrap_err();
        assert!(matches!(err, FileError::Shape(_)));
    }

    #[test]
    fn csv_failure_leaves_existing_target_untouched() {
        let dir = tempdir().unwrap();
        let origin = dir.path().join("table.yml");
        let target = dir.path().join("table.csv");
        fs::write(&origin, "- [a, b]\n- [c, d]\n- [e, [nested]]\n").unwrap();
        fs::write(&target, "previous,content\n").unwrap();

        let err = yaml_to_csv(&origin, &target).unwrap_err();
        assert!(err.to_string().contains("row 2"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "previous,content\n");
    }

    #[test]
    fn csv_rejects_nested_cells() {
        let dir = tempdir().unwrap();
        let origin = dir.path().join("nested.yml");
        fs::write(&origin, "- [a, [b]]\n").unwrap();

        let err = yaml_to_csv(&origin, dir.path().join("out.csv")).unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }
}
