//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::HousingError;

/// Read a file's raw bytes, or `None` if it doesn't exist
///
/// The contents are not required to be UTF-8; decoding is left to the caller.
pub fn read_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, HousingError> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HousingError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, HousingError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(HousingError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| HousingError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| HousingError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), HousingError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| HousingError::Storage(format!("Failed to serialize data: {}", e)))?;
    write_bytes_atomic(path, &bytes)
}

/// Write raw bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), HousingError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            HousingError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must sit in the same directory for the rename to be atomic
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| HousingError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| HousingError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| HousingError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| HousingError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        HousingError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Receipt {
        vendor: String,
        cents: i64,
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert_eq!(read_if_exists(&path).unwrap(), None);
    }

    #[test]
    fn test_read_returns_bytes_that_are_not_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.json");
        fs::write(&path, b"{\"notes\": \"caf\xe9\"}").unwrap();

        let bytes = read_if_exists(&path).unwrap().unwrap();
        assert_eq!(bytes.last(), Some(&b'}'));
        assert!(String::from_utf8(bytes).is_err());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("receipt.json");

        let data = Receipt {
            vendor: "City Water".to_string(),
            cents: 4_250,
        };

        write_json_atomic(&path, &data).unwrap();
        let loaded: Receipt = read_json_required(&path).unwrap();
        assert_eq!(data, loaded);
        let raw = String::from_utf8(read_if_exists(&path).unwrap().unwrap()).unwrap();
        assert!(raw.contains("\"cents\": 4250"));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("receipt.json");

        write_json_atomic(&path, &Receipt::default()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("receipt.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("blob");

        write_bytes_atomic(&path, b"bytes").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"bytes");
    }

    #[test]
    fn test_read_json_required() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("receipt.json");

        assert!(read_json_required::<Receipt, _>(&path).is_err());

        fs::write(&path, "not json at all").unwrap();
        assert!(read_json_required::<Receipt, _>(&path).is_err());
    }
}
