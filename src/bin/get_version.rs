use std::process::ExitCode;

fn main() -> ExitCode {
    fwstamp::app::get_version_main(std::env::args_os())
}
