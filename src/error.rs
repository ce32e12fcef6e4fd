// src/error.rs
use std::path::PathBuf;
use std::process::ExitCode;

use fwstamp_engine::EngineError;
use fwstamp_shared_kernel::ErrorKind;
use thiserror::Error;

/// Process exit codes shared by both tools.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
    pub const USAGE: u8 = 2;
    pub const MISSING_VERSION: u8 = 3;
    pub const NOT_FOUND: u8 = 4;
    pub const PERMISSION_DENIED: u8 = 5;
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid CLI value: {flag} = {value:?} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    Config(String),

    #[error("No {marker} definition found in '{path}'")]
    MissingVersion { marker: String, path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Engine(e) => e.kind(),
            _ => ErrorKind::Other,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidValue { .. } | Self::Config(_) => exit_code::USAGE,
            Self::MissingVersion { .. } => exit_code::MISSING_VERSION,
            _ => match self.kind() {
                ErrorKind::NotFound => exit_code::NOT_FOUND,
                ErrorKind::PermissionDenied => exit_code::PERMISSION_DENIED,
                ErrorKind::Other => exit_code::FAILURE,
            },
        }
    }
}

impl From<&AppError> for ExitCode {
    fn from(err: &AppError) -> Self {
        Self::from(err.exit_code())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
