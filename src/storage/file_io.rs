//! File I/O utilities with atomic writes
//!
//! Backup files are written with 4-space indentation, one key/value pair per
//! line, which the object counter relies on.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::DfwError;

const INDENT: &[u8] = b"    ";

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, DfwError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(DfwError::backup_file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| DfwError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| DfwError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a file's raw text, returning an error if file doesn't exist
pub fn read_text_required<P: AsRef<Path>>(path: P) -> Result<String, DfwError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DfwError::backup_file_not_found(path.display().to_string()));
    }

    fs::read_to_string(path)
        .map_err(|e| DfwError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Serialize to a pretty JSON string with 4-space indentation
pub fn to_pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String, DfwError> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, data)?;
    String::from_utf8(buf).map_err(|e| DfwError::Json(format!("Serialized JSON is not UTF-8: {}", e)))
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: W, data: &T) -> Result<(), DfwError> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer)
        .map_err(|e| DfwError::Json(format!("Failed to serialize data: {}", e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// An existing file at `path` is replaced only once the new content is fully
/// on disk.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), DfwError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                DfwError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| DfwError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write_pretty(&mut writer, data)?;
    writer
        .flush()
        .map_err(|e| DfwError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| DfwError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        DfwError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
