// crates/engine/src/renamer.rs
use crate::config::RenameConfig;
use crate::error::{EngineError, Result};
use crate::extractor::VersionExtractor;
use fwstamp_shared_kernel::{ArtifactPath, DestinationFilename, ErrorKind, VersionString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What was found at the version header location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderStatus {
    Found,
    Missing,
    /// File exists but could not be read; the message is kept for reporting.
    Unreadable(String),
}

/// Result of looking for the version header.
#[derive(Debug, Clone)]
pub struct VersionLookup {
    pub version_file: PathBuf,
    pub header: HeaderStatus,
    pub version: Option<VersionString>,
}

/// Everything decided before touching the destination.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub source: ArtifactPath,
    pub version_file: PathBuf,
    pub header: HeaderStatus,
    pub version: Option<VersionString>,
    pub filename: DestinationFilename,
    pub destination: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RenameOutcome {
    pub plan: RenamePlan,
    /// Bytes written; `None` for a dry run.
    pub copied: Option<u64>,
}

/// Copies a build artifact next to its version header under a versioned name.
#[derive(Debug, Clone)]
pub struct ArtifactRenamer {
    config: RenameConfig,
    extractor: VersionExtractor,
}

impl ArtifactRenamer {
    /// # Errors
    /// Fails if the extractor cannot be built from `config.extract`.
    pub fn new(config: RenameConfig) -> Result<Self> {
        let extractor = VersionExtractor::new(&config.extract)?;
        Ok(Self { config, extractor })
    }

    pub fn config(&self) -> &RenameConfig {
        &self.config
    }

    /// Looks for the version header below `output_dir`. Never fails: a missing
    /// or unreadable header just means no version.
    pub fn locate_version(&self, output_dir: &ArtifactPath) -> VersionLookup {
        let version_file = self
            .config
            .join_mode
            .version_file(output_dir.as_path(), &self.config.version_file);

        if !version_file.is_file() {
            log::info!("no version header at {}", version_file.display());
            return VersionLookup {
                version_file,
                header: HeaderStatus::Missing,
                version: None,
            };
        }

        let (header, version) = match self.extractor.extract(&version_file) {
            Ok(version) => (HeaderStatus::Found, version),
            // 存在確認後に削除された場合
            Err(e) if e.kind() == ErrorKind::NotFound => (HeaderStatus::Missing, None),
            Err(e) => {
                log::warn!("{e}");
                (HeaderStatus::Unreadable(e.to_string()), None)
            }
        };
        VersionLookup {
            version_file,
            header,
            version,
        }
    }

    /// Resolves the version and destination path without copying.
    ///
    /// # Errors
    /// `EngineError::MissingFileName` when the source path ends in a separator.
    pub fn plan(&self, source: &ArtifactPath, output_dir: &ArtifactPath) -> Result<RenamePlan> {
        let lookup = self.locate_version(output_dir);
        self.plan_with(source, output_dir, lookup)
    }

    /// Like [`Self::plan`], reusing a header lookup the caller already made.
    ///
    /// # Errors
    /// `EngineError::MissingFileName` when the source path ends in a separator.
    pub fn plan_with(
        &self,
        source: &ArtifactPath,
        output_dir: &ArtifactPath,
        lookup: VersionLookup,
    ) -> Result<RenamePlan> {
        let VersionLookup {
            version_file,
            header,
            version,
        } = lookup;

        let base_name = source.base_name();
        if base_name.is_empty() {
            return Err(EngineError::MissingFileName(source.as_path().to_path_buf()));
        }

        let filename = DestinationFilename::derive(&base_name, version.as_ref(), &self.config.pattern);
        if version.is_some() && !filename.is_versioned() {
            log::info!(
                "'{}' does not contain '{}'; keeping the original name",
                Path::new(&base_name).display(),
                self.config.pattern
            );
        }

        let destination = self.config.join_mode.join(output_dir.as_path(), filename.as_os_str());
        log::debug!("destination: {}", destination.display());

        Ok(RenamePlan {
            source: source.clone(),
            version_file,
            header,
            version,
            filename,
            destination,
        })
    }

    /// Copies the source to the planned destination, replacing any existing file.
    ///
    /// # Errors
    /// `EngineError::SourceNotFound` if the source is missing, otherwise
    /// `EngineError::Copy` carrying the I/O error.
    pub fn execute(&self, plan: &RenamePlan) -> Result<u64> {
        ensure_source(plan.source.as_path(), &plan.destination)?;

        if same_file(plan.source.as_path(), &plan.destination) {
            log::warn!(
                "source and destination are the same file ({}); nothing to copy",
                plan.destination.display()
            );
            return fs::metadata(&plan.destination)
                .map(|meta| meta.len())
                .map_err(|source| copy_error(plan, source));
        }

        fs::copy(plan.source.as_path(), &plan.destination).map_err(|source| copy_error(plan, source))
    }

    /// Checks that the planned source exists without copying it.
    ///
    /// # Errors
    /// `EngineError::SourceNotFound` if the source is missing.
    pub fn verify_source(&self, plan: &RenamePlan) -> Result<()> {
        ensure_source(plan.source.as_path(), &plan.destination)
    }

    /// Plans and, unless `dry_run` is set, copies.
    ///
    /// # Errors
    /// See [`Self::plan`] and [`Self::execute`].
    pub fn run(&self, source: &ArtifactPath, output_dir: &ArtifactPath) -> Result<RenameOutcome> {
        let plan = self.plan(source, output_dir)?;
        let copied = if self.config.dry_run {
            self.verify_source(&plan)?;
            None
        } else {
            Some(self.execute(&plan)?)
        };
        Ok(RenameOutcome { plan, copied })
    }
}

fn ensure_source(source: &Path, destination: &Path) -> Result<()> {
    match fs::metadata(source) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(EngineError::SourceNotFound {
            path: source.to_path_buf(),
        }),
        Err(e) => Err(EngineError::Copy {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: e,
        }),
    }
}

fn copy_error(plan: &RenamePlan, source: io::Error) -> EngineError {
    EngineError::Copy {
        from: plan.source.as_path().to_path_buf(),
        to: plan.destination.clone(),
        source,
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
