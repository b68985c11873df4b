//! CLI command handling
//!
//! This module bridges the parsed command line with the backup and restore
//! layer.

pub mod operation;

pub use operation::{run_operation, OperationPlan, RunOptions, RunReport};
