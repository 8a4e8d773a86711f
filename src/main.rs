//! Fireworq queue failure check (Mackerel check plugin).
//!
//! # Run Overview
//!
//! ```text
//!   flags / config file ──▶ CheckConfig
//!                               │
//!   Fireworq ◀── GET /queues/stats (StatsFetcher)
//!                               │
//!   snapshot file ──▶ load ──▶ failing_queues ──▶ save ──▶ snapshot file
//!                               │
//!                               ▼
//!               "<name> <STATUS>: <queues>" + exit code
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use check_fireworq::check::runner::run_check;
use check_fireworq::cli::{name_from_args, Cli};
use check_fireworq::observability::logging::init_logging;
use check_fireworq::Verdict;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            return report(Verdict::unknown(name_from_args(std::env::args_os()), message));
        }
    };

    let name = cli.display_name();
    let verdict = match cli.into_config() {
        Ok(config) => {
            tracing::debug!(
                origin = ?config.origin().ok(),
                snapshot = %config.snapshot_path().display(),
                "Configuration loaded"
            );
            run_check(&config).await
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            Verdict::unknown(name, e.to_string())
        }
    };

    report(verdict)
}

fn report(verdict: Verdict) -> ExitCode {
    println!("{}", verdict);
    ExitCode::from(verdict.status.exit_code())
}
