use ad_optimizer::{batch, config::BatchConfig, output};
use std::process::ExitCode;

/// Exit code for fatal, batch-level errors. Per-file failures are logged
/// and skipped and do not affect the exit code.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    // No flags, no environment: the project root is the working directory,
    // and every path hangs off it.
    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            output::print_fatal(&e);
            return ExitCode::from(EXIT_FATAL);
        }
    };

    let config = BatchConfig::at_root(&root);
    match batch::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_fatal(&e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
