// src/app.rs
use std::ffi::OsString;
use std::process::ExitCode;

use fwstamp_engine::{ArtifactRenamer, EngineError, RenameOutcome};
use fwstamp_shared_kernel::{ArtifactPath, ErrorKind, VersionString};

use crate::cli::{self, COPY_FILE_USAGE, CopyFileArgs, GET_VERSION_USAGE, GetVersionArgs, ParseExit};
use crate::error::{AppError, Result, exit_code};
use crate::{logging, presentation};

fn handle_parse_exit(exit: ParseExit) -> ExitCode {
    match exit {
        ParseExit::Informational(err) => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ParseExit::Usage { usage, detail } => {
            println!("{usage}");
            eprint!("{detail}");
            ExitCode::from(exit_code::USAGE)
        }
    }
}

/// Entry point of the `copy_file` binary.
pub fn copy_file_main<I, S>(argv: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let args: CopyFileArgs = match cli::parse_from(argv, COPY_FILE_USAGE) {
        Ok(args) => args,
        Err(exit) => return handle_parse_exit(exit),
    };
    logging::init(args.common.verbose);

    match copy_file(&args) {
        Ok(outcome) => {
            presentation::print_copy_report(&outcome);
            ExitCode::SUCCESS
        }
        Err((header, err)) => {
            for line in header {
                println!("{line}");
            }
            tracing::debug!(error = ?err, "copy_file failed");
            println!("{}", presentation::copy_error_line(&err));
            ExitCode::from(&err)
        }
    }
}

/// Error plus the header lines already decided, printed ahead of the error.
type CopyFailure = (Vec<String>, AppError);

fn bare(err: impl Into<AppError>) -> CopyFailure {
    (Vec::new(), err.into())
}

fn copy_file(args: &CopyFileArgs) -> std::result::Result<RenameOutcome, CopyFailure> {
    let config = cli::build_rename_config(args).map_err(bare)?;
    let renamer = ArtifactRenamer::new(config).map_err(bare)?;

    let source = ArtifactPath::new(args.input_binary_path.clone());
    let output_dir = ArtifactPath::new(args.output_binary_path.clone());

    // ヘッダ判定行はファイル名の検証より先に確定させる
    let lookup = renamer.locate_version(&output_dir);
    let header = presentation::header_lines(&lookup.header);
    let with_header = |e: EngineError| (header.clone(), AppError::from(e));

    let plan = renamer.plan_with(&source, &output_dir, lookup).map_err(with_header)?;
    tracing::info!(
        source = %plan.source,
        version_file = %plan.version_file.display(),
        destination = %plan.destination.display(),
        version = plan.version.as_deref().unwrap_or("-"),
        "planned copy"
    );

    let copied = if renamer.config().dry_run {
        renamer.verify_source(&plan).map_err(with_header)?;
        None
    } else {
        Some(renamer.execute(&plan).map_err(with_header)?)
    };
    Ok(RenameOutcome { plan, copied })
}

/// Entry point of the `get_version` binary.
pub fn get_version_main<I, S>(argv: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let args: GetVersionArgs = match cli::parse_from(argv, GET_VERSION_USAGE) {
        Ok(args) => args,
        Err(exit) => return handle_parse_exit(exit),
    };
    logging::init(args.common.verbose);

    match get_version(&args) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(AppError::MissingVersion { marker, path }) if args.json => {
            // JSON consumers still get a document with a null version
            match presentation::render_version(&path, None, true) {
                Ok(Some(doc)) => println!("{doc}"),
                Ok(None) => {}
                Err(e) => eprintln!("{e}"),
            }
            eprintln!("{}", AppError::MissingVersion { marker, path });
            ExitCode::from(exit_code::MISSING_VERSION)
        }
        Err(err) => {
            eprintln!("{}", get_version_error_line(&err));
            ExitCode::from(&err)
        }
    }
}

fn get_version(args: &GetVersionArgs) -> Result<String> {
    let config = cli::build_extract_config(&args.common)?;
    let version: Option<VersionString> = fwstamp_engine::extract_version(&args.file_path, &config)?;

    let Some(version) = version else {
        return Err(AppError::MissingVersion {
            marker: config.marker,
            path: args.file_path.clone(),
        });
    };
    tracing::debug!(file = %args.file_path.display(), %version, "version extracted");

    presentation::render_version(&args.file_path, Some(&version), args.json)?
        .ok_or_else(|| AppError::Config("nothing to render".to_string()))
}

fn get_version_error_line(err: &AppError) -> String {
    match (err, err.kind()) {
        (AppError::MissingVersion { .. }, _) => err.to_string(),
        (AppError::Engine(EngineError::VersionRead { path, .. }), ErrorKind::NotFound) => {
            format!("File '{}' not found.", path.display())
        }
        (_, ErrorKind::PermissionDenied) => format!("Permission error: {err}"),
        _ => format!("An error occurred: {err}"),
    }
}
