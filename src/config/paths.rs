//! Path management for backup files
//!
//! Every category is persisted as `<prefix>-<category>-bkup.json` inside a
//! single backup directory. The directory defaults to the current working
//! directory, so the files land where the operator runs the tool.

use std::path::{Path, PathBuf};

use crate::backup::Category;
use crate::error::DfwError;

/// Default prefix for backup file names
pub const DEFAULT_PREFIX: &str = "nsx";

/// Resolves backup file locations for each category
#[derive(Debug, Clone)]
pub struct BackupPaths {
    /// Directory holding the backup files
    dir: PathBuf,
    /// File name prefix
    prefix: String,
}

impl BackupPaths {
    /// Create a new BackupPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is empty or contains a path separator.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self, DfwError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(DfwError::Config("backup file prefix must not be empty".into()));
        }
        if prefix.contains(['/', '\\']) {
            return Err(DfwError::Config(format!(
                "backup file prefix must not contain a path separator: {}",
                prefix
            )));
        }

        Ok(Self {
            dir: dir.into(),
            prefix,
        })
    }

    /// Backup files in the current directory with the given prefix
    pub fn in_current_dir(prefix: impl Into<String>) -> Result<Self, DfwError> {
        Self::new(PathBuf::new(), prefix)
    }

    /// Get the backup directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the file name prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// File name (without directory) for a category
    pub fn file_name(&self, category: Category) -> String {
        format!("{}-{}-bkup.json", self.prefix, category.file_suffix())
    }

    /// Full path of the backup file for a category
    pub fn file_for(&self, category: Category) -> PathBuf {
        self.dir.join(self.file_name(category))
    }

    /// Ensure the backup directory exists
    pub fn ensure_directory(&self) -> Result<(), DfwError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| DfwError::Io(format!("Failed to create backup directory: {}", e)))
    }
}
