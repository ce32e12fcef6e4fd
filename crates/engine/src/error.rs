// crates/engine/src/error.rs
use fwstamp_shared_kernel::{ErrorKind, StampError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read version header '{path}': {source}")]
    VersionRead {
        path: PathBuf,
        #[source]
        source: StampError,
    },

    #[error("Source file not found: '{path}'")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to copy '{from}' to '{to}': {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source path '{0}' has no file name")]
    MissingFileName(PathBuf),

    #[error("Invalid version marker: {0}")]
    Marker(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VersionRead { source, .. } => source.kind(),
            Self::SourceNotFound { .. } => ErrorKind::NotFound,
            Self::Copy { source, .. } => source.kind().into(),
            Self::MissingFileName(_) | Self::Marker(_) | Self::Config(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
