// tests/common/workspace.rs
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary `build/` + `out/` layout mirroring a firmware build tree.
#[derive(Debug)]
pub struct BuildWorkspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl BuildWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::create_dir_all(dir.path().join("out")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file relative to the workspace root, creating parents.
    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create directory {parent:?}: {e}"));
        }
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
        path
    }

    /// Write `out/src/version.h` with the given version string.
    pub fn version_header(&self, version: &str) -> PathBuf {
        self.write(
            "out/src/version.h",
            format!(
                "#ifndef _VERSION_H\n#define _VERSION_H\n\n//Version string\n#define APP_VERSION_STRING \"{version}\"\n\n#endif\n"
            ),
        )
    }

    /// Output directory argument with a trailing '/', as build scripts pass it.
    pub fn out_arg(&self) -> String {
        format!("{}/", self.dir.path().join("out").display())
    }

    pub fn out_file(&self, name: &str) -> PathBuf {
        self.dir.path().join("out").join(name)
    }

    /// Sorted names of regular files directly inside `out/`.
    pub fn out_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path().join("out"))
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn copy_file(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_copy_file"));
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        cmd
    }

    pub fn get_version(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_get_version"));
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        cmd
    }
}
