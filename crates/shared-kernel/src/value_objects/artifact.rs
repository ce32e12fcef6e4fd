// crates/shared-kernel/src/value_objects/artifact.rs
use std::{
    ffi::{OsStr, OsString},
    fmt,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_objects::version::{VersionString, VersionSuffix};

/// Path handed in on the command line (source artifact or output directory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactPath(PathBuf);

impl ArtifactPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn display(&self) -> std::path::Display<'_> {
        self.0.display()
    }

    /// Last path segment, split on `/` (and the platform separator).
    ///
    /// Unlike [`Path::file_name`] this does not normalize: `build/` yields an
    /// empty name and `.`/`..` are returned verbatim. The bytes of the name are
    /// kept as-is, valid UTF-8 or not.
    pub fn base_name(&self) -> OsString {
        let bytes = self.0.as_os_str().as_encoded_bytes();
        let start = bytes.iter().rposition(|b| is_separator(*b)).map_or(0, |i| i + 1);
        match &bytes[start..] {
            [] => OsString::new(),
            b"." => OsString::from("."),
            b".." => OsString::from(".."),
            // 末尾が区切りでも . / .. でもなければ file_name と一致する
            _ => self.0.file_name().map(OsStr::to_os_string).unwrap_or_default(),
        }
    }
}

fn is_separator(byte: u8) -> bool {
    byte == b'/' || (MAIN_SEPARATOR.is_ascii() && byte == MAIN_SEPARATOR as u8)
}

impl From<PathBuf> for ArtifactPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ArtifactPath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl AsRef<Path> for ArtifactPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Substring of the artifact name that receives the version suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactPattern(String);

impl ArtifactPattern {
    pub const DEFAULT: &'static str = "demo.bin";

    pub fn new(pattern: impl Into<String>) -> DomainResult<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(DomainError::EmptyPattern);
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `demo.bin` + `1_2_3` -> `demo_1_2_3.bin`. Patterns without an
    /// extension get the suffix appended.
    pub fn versioned(&self, suffix: &VersionSuffix) -> String {
        match self.0.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{suffix}.{ext}"),
            _ => format!("{}_{suffix}", self.0),
        }
    }
}

impl Default for ArtifactPattern {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl TryFrom<String> for ArtifactPattern {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<ArtifactPattern> for String {
    fn from(value: ArtifactPattern) -> Self {
        value.0
    }
}

impl fmt::Display for ArtifactPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File name the artifact is copied to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationFilename {
    name: OsString,
    versioned: bool,
}

impl DestinationFilename {
    /// Substitutes every occurrence of `pattern` in `base_name` with its
    /// versioned form. Names that do not contain the pattern pass through
    /// unchanged even when a version is known, and so do names that are not
    /// valid UTF-8.
    pub fn derive(base_name: &OsStr, version: Option<&VersionString>, pattern: &ArtifactPattern) -> Self {
        match (version, base_name.to_str()) {
            (Some(version), Some(name)) if name.contains(pattern.as_str()) => {
                let replacement = pattern.versioned(&version.suffix());
                Self {
                    name: name.replace(pattern.as_str(), &replacement).into(),
                    versioned: true,
                }
            }
            _ => Self {
                name: base_name.to_os_string(),
                versioned: false,
            },
        }
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.name
    }

    /// Whether a version suffix was inserted.
    pub fn is_versioned(&self) -> bool {
        self.versioned
    }
}

impl fmt::Display for DestinationFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Path::new(&self.name).display())
    }
}
