//! File I/O utilities with atomic writes
//!
//! Each write goes to a sibling temp file that is renamed over the target, so
//! a single file is either completely written or not modified at all.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExpenseError;

/// Read a whole file as text, returning `None` if it doesn't exist
///
/// Undecodable bytes are replaced rather than reported, so they surface later
/// as a parse failure of the content.
pub fn read_text_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<String>, ExpenseError> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ExpenseError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

/// Write plain text to a file atomically
pub fn write_text_atomic<P: AsRef<Path>>(path: P, text: &str) -> Result<(), ExpenseError> {
    write_atomic(path.as_ref(), |writer| {
        writer
            .write_all(text.as_bytes())
            .map_err(|e| ExpenseError::Storage(format!("Failed to write data: {}", e)))
    })
}

fn write_atomic<F>(path: &Path, fill: F) -> Result<(), ExpenseError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ExpenseError>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    if let Err(e) = fill(&mut writer) {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert_eq!(read_text_if_exists(&path).unwrap(), None);
    }

    #[test]
    fn test_write_and_read_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("balance.txt");

        write_text_atomic(&path, "60.00").unwrap();
        assert_eq!(read_text_if_exists(&path).unwrap().as_deref(), Some("60.00"));
    }

    #[test]
    fn test_write_json_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        write_json_atomic(&path, &vec![1, 2, 3]).unwrap();
        write_json_atomic(&path, &vec![4]).unwrap();

        let contents = read_text_if_exists(&path).unwrap().unwrap();
        let parsed: Vec<i32> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, vec![4]);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        write_json_atomic(&path, &Vec::<i32>::new()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("expenses.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("balance.txt");

        write_text_atomic(&path, "0.00").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_utf8_reads_as_corrupt_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("balance.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let contents = read_text_if_exists(&path).unwrap().unwrap();
        assert!(contents.parse::<f64>().is_err());
    }
}
