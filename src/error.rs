//! Error types and exit codes for district-engine
//!
//! The directory core (normalize, build, query, select) never fails. Errors
//! only arise at the edges: reading files, validating catalogs, parsing
//! configuration and resolving CLI arguments.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for district-engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error at {path}: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("Invalid input data: {message}")]
    InvalidInput { message: String },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown district: {name}")]
    UnknownDistrict { name: String },

    #[error("Unknown region: {name}")]
    UnknownRegion { name: String },
}

impl EngineError {
    /// Convert error to the CLI exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Invalid input data
    /// - 3: Catalog validation failure
    /// - 4: Configuration error
    /// - 5: Unknown district or region
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::IoError { .. } => ExitCode::from(1),
            Self::InvalidInput { .. } => ExitCode::from(2),
            Self::InvalidCatalog { .. } => ExitCode::from(3),
            Self::ConfigError { .. } => ExitCode::from(4),
            Self::UnknownDistrict { .. } => ExitCode::from(5),
            Self::UnknownRegion { .. } => ExitCode::from(5),
        }
    }
}

/// Result type alias for district-engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
