//! Backup and restore of distributed firewall configuration
//!
//! # Architecture
//!
//! - `Category`: the three slices of the policy tree (services, context
//!   profiles, policies with groups) and their queries and file names
//! - `BackupManager`: fetches a category and saves it to its backup file
//! - `RestoreManager`: sends a backup file back to the manager
//! - `count_objects`: policy/rule/group summary of a saved file
//!
//! # Backup Format
//!
//! Each file holds the manager's hierarchical `Infra` document exactly as
//! returned by `GET /policy/api/v1/infra?filter=...`, pretty-printed with
//! 4-space indentation. The tool does not interpret it beyond counting.
//!
//! # Example
//!
//! ```rust,ignore
//! use nsx_dfw_backup::api::ManagerClient;
//! use nsx_dfw_backup::backup::{BackupManager, Category, RestoreManager};
//! use nsx_dfw_backup::config::{BackupPaths, ManagerSettings};
//!
//! let client = ManagerClient::new(ManagerSettings::new("10.0.0.5", "admin", "secret")?)?;
//! let paths = BackupPaths::in_current_dir("nsx")?;
//!
//! let saved = BackupManager::new(&client, &paths).backup(Category::PolicyAndGroups)?;
//! println!("{}", saved);
//!
//! let restored = RestoreManager::new(&client, &paths).restore(Category::PolicyAndGroups)?;
//! println!("{}", restored);
//! ```

mod category;
mod counter;
mod manager;
mod restore;

pub use category::Category;
pub use counter::{count_objects, ObjectCounts};
pub use manager::{BackupManager, BackupOutcome};
pub use restore::{RestoreManager, RestoreOutcome};
