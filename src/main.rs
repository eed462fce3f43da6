//! Stdio Tetris runner (default binary).
//!
//! Reads line-delimited JSON requests from stdin and writes one JSON reply per
//! request to stdout. Logs go to stderr, filtered by `RUST_LOG` (default: info).

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tiny_tetris::adapter::{Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::from_env();
    info!(autostart = config.autostart, "starting session");

    let mut session = Session::new(config.build_game());
    if config.autostart {
        session.start();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;

    info!(
        score = session.game().score(),
        lines = session.game().lines(),
        "session finished"
    );
    Ok(())
}
