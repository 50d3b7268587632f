use std::process::ExitCode;

fn main() -> ExitCode {
    lcd::cli::run()
}
