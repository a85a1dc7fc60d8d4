//! The memegen command-line executable.

use std::process::ExitCode;

fn main() -> ExitCode {
    match memegen::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::from(memegen::exit_code(&err))
        }
    }
}
