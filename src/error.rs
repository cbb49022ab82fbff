//! Error types for ctob
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{AttributeError, FsError, GeneratorError};

/// Result type alias for ctob operations
pub type CtobResult<T> = Result<T, CtobError>;

/// Main error type for ctob operations
#[derive(Error, Debug)]
pub enum CtobError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Solution manifest could not be parsed
    #[error("invalid manifest {file}: {message}")]
    ManifestParse { file: PathBuf, message: String },

    /// Item property storage failed
    #[error(transparent)]
    AttributeStore(#[from] AttributeError),

    /// Generator invocation failed
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// Item not present in any project of the solution
    #[error("item '{path}' not found in solution")]
    UnknownItem { path: PathBuf },

    /// Item type does not expose the per-item build properties
    #[error("item '{path}' does not support build properties")]
    PropertiesUnsupported { path: PathBuf },

    /// No property extender is registered for the item's category
    #[error("no property extender registered for {category}")]
    ExtenderNotRegistered { category: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Background build walk ended without a report
    #[error("build walk thread panicked")]
    WalkPanicked,
}
