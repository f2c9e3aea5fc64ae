mod config;
mod dashboard;
mod entities;
mod gradebook;
mod grading;
mod ipc;
mod logging;
mod modal;
mod report;
mod rules;
mod seed;
mod view;

use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "raporkud")]
#[command(about = "In-memory state sidecar for the RaporKu TPQ dashboard", long_about = None)]
struct Cli {
    /// Log filter for this crate when RUST_LOG is not set.
    #[arg(long, env = "RAPORKUD_LOG", default_value = "info")]
    log_level: String,
    /// Start with no students, teachers or classes instead of the mock data.
    #[arg(long)]
    empty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    let mut state = if cli.empty {
        ipc::AppState::default()
    } else {
        ipc::AppState::seeded()
    };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        students = state.students.len(),
        "raporkud ready"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // No id to reply to.
                let resp = serde_json::json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() }
                });
                writeln!(stdout, "{}", resp)?;
                stdout.flush()?;
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        writeln!(stdout, "{}", resp)?;
        stdout.flush()?;
    }
    tracing::info!("raporkud exiting");
    Ok(())
}
