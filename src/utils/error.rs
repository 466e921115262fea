//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Tree mutation, merge, cloning and traversal never fail; only the edges
//! of the system (loading profiles, decoding flat levels, writing files) do.

use thiserror::Error;

/// Errors that can occur while loading a symbolized profile
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read profile: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur while decoding flamebearer levels
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Level {level} has {len} values, expected a multiple of 4")]
    MisalignedLevel { level: usize, len: usize },

    #[error("Level {level} references name index {index}, but only {names} names exist")]
    NameOutOfRange {
        level: usize,
        index: i64,
        names: usize,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
