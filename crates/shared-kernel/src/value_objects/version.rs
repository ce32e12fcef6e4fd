// crates/shared-kernel/src/value_objects/version.rs
use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Version value taken from the quoted part of an `APP_VERSION_STRING` define.
///
/// Always non-empty. The text is not checked against any versioning scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionString(String);

impl VersionString {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::EmptyVersion);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename-safe form: every `.` becomes `_`.
    pub fn suffix(&self) -> VersionSuffix {
        VersionSuffix(self.0.replace('.', "_"))
    }
}

impl TryFrom<String> for VersionString {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<VersionString> for String {
    fn from(value: VersionString) -> Self {
        value.0
    }
}

impl Deref for VersionString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Version text as embedded into a destination filename (`1.2.3` -> `1_2_3`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionSuffix(String);

impl VersionSuffix {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
