// src/main.rs

use cronwrap::{cli, logging, run};

/// Exit status for setup failures (bad config, missing interpreter or
/// script, unwritable log). Task failures exit with the child's own code.
const SETUP_FAILURE_CODE: i32 = 2;

#[tokio::main]
async fn main() {
    std::process::exit(run_main().await);
}

async fn run_main() -> i32 {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("cronwrap error: {err}");
        return SETUP_FAILURE_CODE;
    }

    match run(args).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("cronwrap error: {err}");
            SETUP_FAILURE_CODE
        }
    }
}
