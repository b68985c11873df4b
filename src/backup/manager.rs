//! Backup of manager configuration to JSON files
//!
//! Each category is fetched with one filtered `GET` of the policy tree and
//! written verbatim, overwriting the previous file of the same name.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::api::{HttpMethod, ManagerApi, INFRA_PATH};
use crate::config::BackupPaths;
use crate::error::DfwResult;
use crate::storage::{read_text_required, write_json_atomic};

use super::category::Category;
use super::counter::{count_objects, ObjectCounts};

/// Result of backing up one category
#[derive(Debug, Clone, PartialEq)]
pub struct BackupOutcome {
    /// Category that was saved
    pub category: Category,
    /// File the tree was written to
    pub path: PathBuf,
    /// Object counts, for categories that report them
    pub counts: Option<ObjectCounts>,
}

impl fmt::Display for BackupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Backup saved as [{}]",
            self.category.backup_label(),
            self.path.display()
        )
    }
}

/// Saves manager configuration categories to backup files
pub struct BackupManager<'a, A: ManagerApi + ?Sized> {
    api: &'a A,
    paths: &'a BackupPaths,
}

impl<'a, A: ManagerApi + ?Sized> BackupManager<'a, A> {
    /// Create a new BackupManager
    pub fn new(api: &'a A, paths: &'a BackupPaths) -> Self {
        Self { api, paths }
    }

    /// Inventory query path for a category
    pub fn query_path(category: Category) -> String {
        format!("{}?filter={}", INFRA_PATH, category.filter())
    }

    /// Fetch one category and write it to its backup file
    ///
    /// Any API failure is returned as is; nothing is written in that case.
    pub fn backup(&self, category: Category) -> DfwResult<BackupOutcome> {
        let tree = self
            .api
            .call(HttpMethod::Get, &Self::query_path(category), None)?
            .unwrap_or(Value::Null);

        let path = self.paths.file_for(category);
        self.paths.ensure_directory()?;
        write_json_atomic(&path, &tree)?;

        let counts = if category.is_counted() {
            Some(count_objects(&read_text_required(&path)?))
        } else {
            None
        };

        info!(%category, path = %path.display(), "backup saved");

        Ok(BackupOutcome {
            category,
            path,
            counts,
        })
    }
}
