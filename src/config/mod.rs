//! Configuration module for nsx-dfw-backup
//!
//! This module provides the immutable run configuration:
//! - Manager connection settings (host and credentials)
//! - Backup file path resolution (directory and prefix)

pub mod paths;
pub mod settings;

pub use paths::BackupPaths;
pub use settings::ManagerSettings;
