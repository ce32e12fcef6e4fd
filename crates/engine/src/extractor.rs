// crates/engine/src/extractor.rs
use crate::config::ExtractConfig;
use crate::error::{EngineError, Result};
use fwstamp_shared_kernel::{ErrorContext, VersionString};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Finds `#define <MARKER> "<value>"` in header text.
#[derive(Debug, Clone)]
pub struct VersionExtractor {
    pattern: Regex,
}

impl VersionExtractor {
    /// # Errors
    /// Returns `EngineError::Config` for a blank marker.
    pub fn new(config: &ExtractConfig) -> Result<Self> {
        let marker = config.marker.trim();
        if marker.is_empty() {
            return Err(EngineError::Config("version marker must not be empty".to_string()));
        }
        let pattern = Regex::new(&format!(r#"#define\s+{}\s+"(.*?)""#, regex::escape(marker)))?;
        Ok(Self { pattern })
    }

    /// Quoted value of the define on this line, if any. May be empty.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Scans lines in order and stops at the first define.
    ///
    /// A define with an empty value (`""`) still ends the scan and yields `None`.
    ///
    /// # Errors
    /// Propagates read failures, including invalid UTF-8.
    pub fn scan<R: BufRead>(&self, reader: R) -> std::io::Result<Option<VersionString>> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(value) = self.match_line(&line) {
                log::debug!("version define found on line {}: {value:?}", idx + 1);
                return Ok(VersionString::new(value).ok());
            }
        }
        Ok(None)
    }

    /// Reads `path` and returns the first version value.
    ///
    /// # Errors
    /// `EngineError::VersionRead` when the file cannot be opened or read; use
    /// [`EngineError::kind`] to tell a missing file from other failures.
    pub fn extract(&self, path: &Path) -> Result<Option<VersionString>> {
        self.read(path).map_err(|source| EngineError::VersionRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read(&self, path: &Path) -> fwstamp_shared_kernel::Result<Option<VersionString>> {
        let file = File::open(path).context("opening file")?;
        let version = self.scan(BufReader::new(file)).context("reading lines")?;
        if version.is_none() {
            log::debug!("no version define in {}", path.display());
        }
        Ok(version)
    }
}
