use std::process::ExitCode;

fn main() -> ExitCode {
    htmltoc::cli::run()
}
