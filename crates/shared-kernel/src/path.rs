// crates/shared-kernel/src/path.rs
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How a directory and a file name are combined into one path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Literal string concatenation; the caller supplies any separator.
    /// Build scripts pass `out/` and expect `out/<name>`.
    #[default]
    Concat,
    /// Exactly one separator between directory and name.
    Join,
}

impl JoinMode {
    pub fn join(self, dir: &Path, name: impl AsRef<OsStr>) -> PathBuf {
        let name = name.as_ref();
        match self {
            Self::Concat => {
                let mut joined = OsString::from(dir.as_os_str());
                joined.push(name);
                PathBuf::from(joined)
            }
            // components() drops repeated and trailing separators without
            // touching the bytes of each segment
            Self::Join => dir
                .components()
                .chain(Path::new(name).components().filter(|c| !matches!(c, Component::RootDir)))
                .collect(),
        }
    }

    /// Location of the version header below the output directory.
    ///
    /// In `Concat` mode a `/` is always inserted, so `out/` gives
    /// `out//src/version.h`, which the OS resolves like `out/src/version.h`.
    pub fn version_file(self, dir: &Path, relative: &str) -> PathBuf {
        match self {
            Self::Concat => self.join(dir, format!("/{relative}")),
            Self::Join => self.join(dir, relative),
        }
    }
}
