//! dockerfile-versions: keep Dockerfile version pins in sync with versions.yaml

use std::process::ExitCode;

fn main() -> ExitCode {
    match dockerfile_versions::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // One line per failure, causes joined with ": ".
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
