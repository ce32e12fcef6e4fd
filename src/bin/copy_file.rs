use std::process::ExitCode;

fn main() -> ExitCode {
    fwstamp::app::copy_file_main(std::env::args_os())
}
