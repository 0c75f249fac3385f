//! Tic-tac-toe in the terminal.
//!
//! A thin presentation layer over `tictactoe_engine`.

#![warn(missing_docs)]

mod cli;
mod repl;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use repl::Shell;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut shell = Shell::new(io::stdout().lock(), cli.quiet);

    if cli.moves.is_empty() {
        info!("Starting interactive game");
        shell.run_interactive(io::stdin().lock())?;
    } else {
        info!(moves = cli.moves.len(), "Playing scripted game");
        shell.run_script(&cli.moves)?;
    }

    let engine = shell.engine();
    info!(status = %engine.status(), turns = engine.turn_count(), "Shell exiting");
    Ok(())
}
