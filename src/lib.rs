//! nsx-dfw-backup - NSX distributed firewall backup and restore
//!
//! This library exports the distributed firewall configuration of an NSX
//! Manager (security policies, rules, groups, services and L7 context
//! profiles) to JSON files through the policy REST API, and re-applies those
//! files with bulk `PATCH` calls.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Manager connection settings and backup file paths
//! - `error`: Custom error types
//! - `api`: Manager REST API client
//! - `storage`: Atomic JSON file I/O
//! - `backup`: Backup, restore and object counting per category
//! - `cli`: Operation dispatch used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use nsx_dfw_backup::api::ManagerClient;
//! use nsx_dfw_backup::cli::{run_operation, OperationPlan, RunOptions};
//! use nsx_dfw_backup::config::{BackupPaths, ManagerSettings};
//!
//! let settings = ManagerSettings::new("10.110.57.244", "admin", "secret")?;
//! let client = ManagerClient::new(settings)?;
//! let paths = BackupPaths::in_current_dir("nsx")?;
//!
//! run_operation(
//!     &client,
//!     &paths,
//!     OperationPlan::parse("backup"),
//!     &RunOptions::default(),
//!     &mut std::io::stdout(),
//! )?;
//! ```

pub mod api;
pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod storage;

pub use error::DfwError;
