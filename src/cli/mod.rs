mod args;
mod value_enum;

pub use args::{COPY_FILE_USAGE, CommonArgs, CopyFileArgs, GET_VERSION_USAGE, GetVersionArgs};
pub use value_enum::CliJoinMode;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use fwstamp_engine::{ExtractConfig, ExtractConfigBuilder, RenameConfig, RenameConfigBuilder};
use fwstamp_shared_kernel::ArtifactPattern;

use crate::error::{AppError, Result};

/// Outcome of argument parsing that is not a normal run.
#[derive(Debug)]
pub enum ParseExit {
    /// `--help` / `--version`; clap prints and exits 0.
    Informational(clap::Error),
    /// Wrong arity or bad flag: print `usage` on stdout, clap's detail on stderr.
    Usage { usage: &'static str, detail: String },
}

/// Parse `argv` without letting clap exit the process.
///
/// # Errors
///
/// Returns [`ParseExit`] for help/version requests and invalid command lines.
pub fn parse_from<T, I, S>(argv: I, usage: &'static str) -> std::result::Result<T, ParseExit>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    T::try_parse_from(argv).map_err(|err| match err.kind() {
        ClapErrorKind::DisplayHelp
        | ClapErrorKind::DisplayVersion
        | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseExit::Informational(err),
        _ => ParseExit::Usage {
            usage,
            detail: err.render().to_string(),
        },
    })
}

fn validate_marker(marker: &str) -> Result<()> {
    if marker.trim().is_empty() {
        return Err(AppError::InvalidValue {
            flag: "--marker".to_string(),
            value: marker.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Build an [`ExtractConfig`] from the shared flags.
///
/// # Errors
///
/// Returns `Err` for an empty `--marker`.
pub fn build_extract_config(common: &CommonArgs) -> Result<ExtractConfig> {
    validate_marker(&common.marker)?;
    ExtractConfigBuilder::default()
        .marker(common.marker.trim())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Build a [`RenameConfig`] from `copy_file` arguments.
///
/// # Errors
///
/// Returns `Err` when `--marker`, `--pattern` or `--version-file` is empty.
pub fn build_rename_config(args: &CopyFileArgs) -> Result<RenameConfig> {
    let extract = build_extract_config(&args.common)?;
    let pattern = ArtifactPattern::new(args.pattern.clone()).map_err(|e| AppError::InvalidValue {
        flag: "--pattern".to_string(),
        value: args.pattern.clone(),
        reason: e.to_string(),
    })?;

    RenameConfigBuilder::default()
        .version_file(args.version_file.clone())
        .pattern(pattern)
        .join_mode(args.join_mode)
        .dry_run(args.dry_run)
        .extract(extract)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}
