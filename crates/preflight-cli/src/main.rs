use preflight_core::logging;

mod cli;

use crate::cli::{Cli, EXIT_FAULT};

fn main() {
    // Initialize logging as early as possible; never let it stop a run.
    let log = logging::LogSettings::for_app("preflight");
    if logging::init(&log).is_err() {
        logging::init_stderr(&log);
    }

    // Checklist failures exit 1; faults get their own code.
    match Cli::run_from_args() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!("aborted: {:#}", err);
            eprintln!("preflight error: {:#}", err);
            std::process::exit(EXIT_FAULT);
        }
    }
}
