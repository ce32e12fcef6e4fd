// crates/engine/src/config.rs
use derive_builder::Builder;
use fwstamp_shared_kernel::{ArtifactPattern, JoinMode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MARKER: &str = "APP_VERSION_STRING";
pub const DEFAULT_VERSION_FILE: &str = "src/version.h";

/// Settings for locating the version define inside a header.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ExtractConfig {
    /// Macro name following `#define`.
    #[builder(default = "DEFAULT_MARKER.to_string()")]
    pub marker: String,
}

impl ExtractConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.marker {
            Some(marker) if marker.trim().is_empty() => Err("marker must not be empty".to_string()),
            _ => Ok(()),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RenameConfig {
    /// Header location relative to the output directory.
    #[builder(default = "DEFAULT_VERSION_FILE.to_string()")]
    pub version_file: String,
    #[builder(default)]
    pub pattern: ArtifactPattern,
    #[builder(default)]
    pub join_mode: JoinMode,
    /// Compute the destination but leave the filesystem untouched.
    #[builder(default)]
    pub dry_run: bool,
    #[builder(default)]
    pub extract: ExtractConfig,
}

impl RenameConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(file) = &self.version_file {
            if file.is_empty() {
                return Err("version file must not be empty".to_string());
            }
        }
        Ok(())
    }
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            version_file: DEFAULT_VERSION_FILE.to_string(),
            pattern: ArtifactPattern::default(),
            join_mode: JoinMode::default(),
            dry_run: false,
            extract: ExtractConfig::default(),
        }
    }
}
