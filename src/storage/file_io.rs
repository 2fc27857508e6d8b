//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt the ledger on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

/// Path of the scratch file used while `path` is being rewritten
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("ledger"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a file atomically (write to temp, then rename)
///
/// `write` receives a buffered writer over the temp file. The target is either
/// fully replaced or left untouched.
pub fn write_atomic<P, F>(path: P, write: F) -> ExpenseResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> ExpenseResult<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path).map_err(|e| {
        ExpenseError::Io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let written = write(&mut writer).and_then(|_| {
        writer
            .flush()
            .map_err(|e| ExpenseError::Io(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| ExpenseError::Io(format!("Failed to sync data: {}", e)))
    });
    drop(writer);

    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Io(format!("Failed to replace {}: {}", path.display(), e))
    })
}
