//! JSON file storage for backup documents
//!
//! Writes are atomic (temp file, then rename) and pretty-printed; reads fail
//! loudly when a required file is missing.

pub mod file_io;

pub use file_io::{read_json_required, read_text_required, to_pretty_json, write_json_atomic};
