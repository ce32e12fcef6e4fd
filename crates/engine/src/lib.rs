// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod extractor;
pub mod renamer;

pub use crate::config::{ExtractConfig, ExtractConfigBuilder, RenameConfig, RenameConfigBuilder};
pub use crate::error::{EngineError, Result};
pub use crate::extractor::VersionExtractor;
pub use crate::renamer::{ArtifactRenamer, HeaderStatus, RenameOutcome, RenamePlan, VersionLookup};

use std::path::Path;

use fwstamp_shared_kernel::VersionString;

/// Reads the version define from `path` with the given settings.
///
/// # Errors
/// Returns an error for an invalid marker or when the file cannot be read.
pub fn extract_version(path: &Path, config: &ExtractConfig) -> Result<Option<VersionString>> {
    VersionExtractor::new(config)?.extract(path)
}
