// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueHint};
use fwstamp_engine::config::{DEFAULT_MARKER, DEFAULT_VERSION_FILE};
use fwstamp_shared_kernel::ArtifactPattern;

use super::value_enum::CliJoinMode;

pub const COPY_FILE_USAGE: &str = "Usage: copy_file <input_binary_path> <output_binary_path>";
pub const GET_VERSION_USAGE: &str = "Usage: get_version <file_path>";

/// Options shared by both tools.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Macro name that carries the version string
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Copy a firmware binary into the output directory, embedding the version
/// from `<output>/src/version.h` into its name.
#[derive(Parser, Debug)]
#[command(name = "copy_file", version = crate::VERSION, override_usage = "copy_file [OPTIONS] <input_binary_path> <output_binary_path>")]
pub struct CopyFileArgs {
    /// Compiled binary to copy
    #[arg(value_name = "input_binary_path", value_hint = ValueHint::FilePath)]
    pub input_binary_path: PathBuf,

    /// Output directory; joined to the file name as given, so include the trailing '/'
    #[arg(value_name = "output_binary_path", value_hint = ValueHint::DirPath)]
    pub output_binary_path: PathBuf,

    /// Version header location relative to the output directory
    #[arg(long, default_value = DEFAULT_VERSION_FILE)]
    pub version_file: String,

    /// Part of the file name that receives the version suffix
    #[arg(long, default_value = ArtifactPattern::DEFAULT)]
    pub pattern: String,

    /// How the output directory and file name are combined
    #[arg(long, value_enum, default_value = "concat")]
    pub join_mode: CliJoinMode,

    /// Print the destination without copying
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Print the APP_VERSION_STRING value defined in a header file.
#[derive(Parser, Debug)]
#[command(name = "get_version", version = crate::VERSION, override_usage = "get_version [OPTIONS] <file_path>")]
pub struct GetVersionArgs {
    /// Header file to scan
    #[arg(value_name = "file_path", value_hint = ValueHint::FilePath)]
    pub file_path: PathBuf,

    /// Emit {"file": ..., "version": ...} instead of the bare version
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}
