// crates/shared-kernel/src/value_objects/mod.rs
pub mod artifact;
pub mod version;

pub use artifact::{ArtifactPath, ArtifactPattern, DestinationFilename};
pub use version::{VersionString, VersionSuffix};
