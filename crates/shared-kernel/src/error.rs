// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StampError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<StampError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StampError>;

/// Value-object validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Version string must not be empty")]
    EmptyVersion,

    #[error("Artifact pattern must not be empty")]
    EmptyPattern,
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Coarse classification used to pick exit codes and user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl From<std::io::ErrorKind> for ErrorKind {
    fn from(kind: std::io::ErrorKind) -> Self {
        match kind {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

impl StampError {
    /// Classifies the innermost cause, looking through `Context` layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Io(err) => err.kind().into(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<StampError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| StampError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
