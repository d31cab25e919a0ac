//! Error types for dictionary generation

use std::path::PathBuf;
use thiserror::Error;

/// Error type for generation operations
#[derive(Debug, Error)]
pub enum LilakError {
    /// I/O failure on a specific file
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Affix template is missing a substitution slot
    #[error("affix template has no {{{slot}}} slot")]
    TemplateSlot { slot: usize },
}

impl LilakError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LilakError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, LilakError>;
