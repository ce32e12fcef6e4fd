// crates/shared-kernel/src/lib.rs
pub use error::{DomainError, DomainResult, ErrorContext, ErrorKind, Result, StampError};

pub mod error;
pub mod path;
pub mod value_objects;

pub use path::JoinMode;
pub use value_objects::{ArtifactPath, ArtifactPattern, DestinationFilename, VersionString, VersionSuffix};
