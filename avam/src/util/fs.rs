use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("failure reading file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure writing file {0}: {1}")]
    WriteError(String, std::io::Error),
    #[error("failure deserializing file {0}: {1}")]
    DeserializeError(String, serde_json::Error),
    #[error("failure serializing contents for file {0}: {1}")]
    SerializeError(String, serde_json::Error),
    #[error("failure reading csv file {0}: {1}")]
    CsvError(String, csv::Error),
}

/// reads a JSON file and deserializes it into the target type.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    let file =
        File::open(path).map_err(|e| FileError::ReadError(path.display().to_string(), e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| FileError::DeserializeError(path.display().to_string(), e))
}

/// reads a JSON file if it exists, falling back to the type's default when it
/// does not. absence is logged as a warning so partial pipeline runs are
/// visible but not fatal.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, FileError> {
    if !path.is_file() {
        log::warn!(
            "input file {} not found, continuing with empty contents",
            path.display()
        );
        return Ok(T::default());
    }
    read_json(path)
}

/// reads a headered CSV file into serde-deserialized rows. empty cells map
/// to None for optional columns.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FileError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| FileError::CsvError(path.display().to_string(), e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| FileError::CsvError(path.display().to_string(), e))
}

/// serializes a value to a JSON file, creating parent directories as needed.
/// catalog files are written pretty for diffability; large outputs compact.
pub fn write_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<(), FileError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FileError::WriteError(path.display().to_string(), e))?;
        }
    }
    let file =
        File::create(path).map_err(|e| FileError::WriteError(path.display().to_string(), e))?;
    let writer = BufWriter::new(file);
    let result = if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    };
    result.map_err(|e| FileError::SerializeError(path.display().to_string(), e))
}

/// writes pre-rendered text to a file, creating parent directories as needed.
pub fn write_string(content: &str, path: &Path) -> Result<(), FileError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FileError::WriteError(path.display().to_string(), e))?;
        }
    }
    std::fs::write(path, content)
        .map_err(|e| FileError::WriteError(path.display().to_string(), e))
}
