//! Backup/restore dispatch for the `--operation` flag
//!
//! The flag value is matched by substring: anything containing `backup` runs
//! the three backups, anything containing `restore` runs the three restores,
//! and a value containing both runs all six, backups first. A value matching
//! neither does nothing.

use std::io::Write;

use tracing::{debug, warn};

use crate::api::ManagerApi;
use crate::backup::{BackupManager, BackupOutcome, Category, RestoreManager, RestoreOutcome};
use crate::config::BackupPaths;
use crate::error::DfwResult;

/// Which halves of the workflow an operation value selects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationPlan {
    pub backup: bool,
    pub restore: bool,
}

impl OperationPlan {
    /// Parse an `--operation` value (case-sensitive substring match)
    pub fn parse(operation: &str) -> Self {
        Self {
            backup: operation.contains("backup"),
            restore: operation.contains("restore"),
        }
    }

    /// True when the value selected nothing
    pub fn is_empty(&self) -> bool {
        !self.backup && !self.restore
    }
}

/// Switches that adjust a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Leave L4 services out of the restore (managers before 3.1 reject it)
    pub skip_services_restore: bool,
}

/// Everything a run did, in order
#[derive(Debug, Default)]
pub struct RunReport {
    pub backups: Vec<BackupOutcome>,
    pub restores: Vec<RestoreOutcome>,
}

impl RunReport {
    /// Whether no operation ran
    pub fn is_empty(&self) -> bool {
        self.backups.is_empty() && self.restores.is_empty()
    }

    /// Restores the manager rejected
    pub fn failed_restores(&self) -> impl Iterator<Item = &RestoreOutcome> {
        self.restores
            .iter()
            .filter(|outcome| matches!(outcome, RestoreOutcome::Rejected { .. }))
    }
}

/// Run the selected backups and restores, printing progress to `out`
///
/// Stops at the first error that is not a manager rejection of a restore;
/// lines already written stay written.
pub fn run_operation<A, W>(
    api: &A,
    paths: &BackupPaths,
    plan: OperationPlan,
    options: &RunOptions,
    out: &mut W,
) -> DfwResult<RunReport>
where
    A: ManagerApi + ?Sized,
    W: Write,
{
    let mut report = RunReport::default();

    if plan.is_empty() {
        warn!("operation matched neither \"backup\" nor \"restore\"; nothing to do");
        return Ok(report);
    }

    if plan.backup {
        let manager = BackupManager::new(api, paths);
        for category in Category::ALL {
            debug!(%category, "starting backup");
            let outcome = manager.backup(category)?;
            writeln!(out, "\n   {}", outcome)?;
            if let Some(counts) = outcome.counts {
                writeln!(out, "\n   NSX DFW Backup has {}\n", counts)?;
            }
            report.backups.push(outcome);
        }
    }

    if plan.restore {
        let manager = RestoreManager::new(api, paths);
        for category in Category::ALL {
            let outcome = if category == Category::Services && options.skip_services_restore {
                RestoreOutcome::Skipped { category }
            } else {
                debug!(%category, "starting restore");
                manager.restore(category)?
            };
            match &outcome {
                RestoreOutcome::Rejected { .. } => writeln!(out, "\n    {}\n", outcome)?,
                RestoreOutcome::Restored { counts: Some(_), .. } => {
                    writeln!(out, "\n   {}\n", outcome)?
                }
                _ => writeln!(out, "\n   {}", outcome)?,
            }
            report.restores.push(outcome);
        }
    }

    out.flush()?;
    Ok(report)
}
