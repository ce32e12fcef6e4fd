use clap::ValueEnum;
use fwstamp_shared_kernel::JoinMode;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliJoinMode {
    /// Append the file name to the directory string as-is
    Concat,
    /// Insert exactly one path separator
    Join,
}

impl From<CliJoinMode> for JoinMode {
    fn from(value: CliJoinMode) -> Self {
        match value {
            CliJoinMode::Concat => JoinMode::Concat,
            CliJoinMode::Join => JoinMode::Join,
        }
    }
}
