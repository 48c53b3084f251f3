//! Command-line interface for crosses.

use clap::{Parser, Subcommand};

/// Naughts and crosses for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "crosses")]
#[command(about = "Two-player naughts and crosses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading moves from stdin
    Play,

    /// Play a list of moves from a fresh game and print the result
    Replay {
        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,

        /// Moves as x,y pairs, keypad numbers 1-9, or cell names
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
