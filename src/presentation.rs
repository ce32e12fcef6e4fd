// src/presentation.rs
use std::path::Path;

use fwstamp_engine::{EngineError, HeaderStatus, RenameOutcome};
use fwstamp_shared_kernel::{ErrorKind, VersionString};
use serde::Serialize;

use crate::error::AppError;

/// Status lines describing the version header lookup.
pub fn header_lines(status: &HeaderStatus) -> Vec<String> {
    match status {
        HeaderStatus::Found => vec!["Version header file found.".to_string()],
        HeaderStatus::Missing => {
            vec!["No version header file found. Using default binary name.".to_string()]
        }
        HeaderStatus::Unreadable(message) => vec![
            "Version header file found.".to_string(),
            format!("An error occurred: {message}"),
        ],
    }
}

pub fn outcome_line(outcome: &RenameOutcome) -> String {
    let source = outcome.plan.source.display();
    let destination = outcome.plan.destination.display();
    match outcome.copied {
        Some(_) => format!("File copied successfully from '{source}' to '{destination}'."),
        None => format!("Dry run: would copy '{source}' to '{destination}'."),
    }
}

/// One-line message for a failed `copy_file` run.
pub fn copy_error_line(err: &AppError) -> String {
    match err {
        AppError::Engine(EngineError::SourceNotFound { .. }) => "Source file not found.".to_string(),
        AppError::Engine(EngineError::Copy { to, .. }) if err.kind() == ErrorKind::NotFound => {
            let dir = to.parent().map_or_else(String::new, |p| p.display().to_string());
            format!("Destination directory not found: '{dir}'.")
        }
        _ if err.kind() == ErrorKind::PermissionDenied => {
            "Permission error: Unable to copy the file.".to_string()
        }
        other => format!("An error occurred: {other}"),
    }
}

pub fn print_copy_report(outcome: &RenameOutcome) {
    for line in header_lines(&outcome.plan.header) {
        println!("{line}");
    }
    println!("{}", outcome_line(outcome));
}

#[derive(Debug, Serialize)]
pub struct VersionReport<'a> {
    pub file: String,
    pub version: Option<&'a VersionString>,
}

impl<'a> VersionReport<'a> {
    pub fn new(file: &Path, version: Option<&'a VersionString>) -> Self {
        Self {
            file: file.display().to_string(),
            version,
        }
    }
}

/// Text printed on stdout by `get_version`. Plain mode prints nothing when absent.
///
/// # Errors
///
/// Returns `Err` if JSON serialization fails.
pub fn render_version(file: &Path, version: Option<&VersionString>, json: bool) -> serde_json::Result<Option<String>> {
    if json {
        return serde_json::to_string(&VersionReport::new(file, version)).map(Some);
    }
    Ok(version.map(ToString::to_string))
}
