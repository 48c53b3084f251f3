//! crosses - naughts and crosses in the terminal.

use anyhow::Result;
use clap::Parser;
use crosses_cli::cli::{Cli, Command};
use crosses_cli::{HostConfig, Shell, replay};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HostConfig::load(cli.config.as_deref())?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { json, moves } => run_replay(&config, &moves, json),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the interactive game loop on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: &HostConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    Shell::new(config).run(stdin.lock(), std::io::stdout())?;
    Ok(())
}

/// Replay moves from a fresh game and print the final state.
#[instrument(skip(config))]
fn run_replay(config: &HostConfig, moves: &[String], json: bool) -> Result<()> {
    let output = replay(moves, config, json)?;
    if json {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
    Ok(())
}
