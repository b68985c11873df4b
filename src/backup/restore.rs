//! Backup restoration for nsx-dfw-backup
//!
//! A backup file is sent back whole in one `PATCH` of the policy root. The
//! manager creates or updates whatever subtree the document describes.

use std::fmt;

use serde_json::Value;
use tracing::{info, warn};

use crate::api::{ApiError, HttpMethod, ManagerApi, INFRA_PATH};
use crate::config::BackupPaths;
use crate::error::DfwResult;
use crate::storage::{read_json_required, read_text_required};

use super::category::Category;
use super::counter::{count_objects, ObjectCounts};

/// Result of restoring one category
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    /// The manager accepted the document
    Restored {
        category: Category,
        counts: Option<ObjectCounts>,
    },
    /// The manager rejected the document with an error message
    Rejected {
        category: Category,
        status: u16,
        message: String,
    },
    /// The category was not sent
    Skipped { category: Category },
}

impl RestoreOutcome {
    /// Category this outcome belongs to
    pub fn category(&self) -> Category {
        match self {
            Self::Restored { category, .. }
            | Self::Rejected { category, .. }
            | Self::Skipped { category } => *category,
        }
    }

    /// Whether the manager accepted the document
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Restored { .. })
    }
}

impl fmt::Display for RestoreOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restored {
                category,
                counts: Some(counts),
            } => write!(f, "SUCCESS - {}: {}", category.restore_label(), counts),
            Self::Restored {
                category,
                counts: None,
            } => write!(f, "SUCCESS - {}", category.restore_label()),
            Self::Rejected {
                category, message, ..
            } => write!(
                f,
                "FAILURE - {} with error: [{}]",
                category.restore_label(),
                message
            ),
            Self::Skipped { category } => write!(f, "SKIPPED - {}", category.restore_label()),
        }
    }
}

/// Sends backup files back to the manager
pub struct RestoreManager<'a, A: ManagerApi + ?Sized> {
    api: &'a A,
    paths: &'a BackupPaths,
}

impl<'a, A: ManagerApi + ?Sized> RestoreManager<'a, A> {
    /// Create a new RestoreManager
    pub fn new(api: &'a A, paths: &'a BackupPaths) -> Self {
        Self { api, paths }
    }

    /// Restore one category from its backup file
    ///
    /// A rejection carrying an `error_message` becomes
    /// [`RestoreOutcome::Rejected`]. A missing or unparsable file, a transport
    /// failure, or an error body without `error_message` is returned as `Err`.
    pub fn restore(&self, category: Category) -> DfwResult<RestoreOutcome> {
        let path = self.paths.file_for(category);
        let document: Value = read_json_required(&path)?;
        let body = serde_json::to_string(&document)?;

        let counts = if category.is_counted() {
            Some(count_objects(&read_text_required(&path)?))
        } else {
            None
        };

        match self.api.call(HttpMethod::Patch, INFRA_PATH, Some(&body)) {
            Ok(_) => {
                info!(%category, path = %path.display(), "restore accepted");
                Ok(RestoreOutcome::Restored { category, counts })
            }
            Err(err @ ApiError::Status { .. }) => {
                let message = err.error_message()?;
                warn!(%category, status = ?err.status(), %message, "restore rejected");
                Ok(RestoreOutcome::Rejected {
                    category,
                    status: err.status().unwrap_or_default(),
                    message,
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
