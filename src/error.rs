//! Error types for schema and configuration loading
//!
//! The engine itself is total; only reading and decoding files can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading schemas or configuration
#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FormError>;
