//! Line-oriented game loop: read a command, update the session, redraw.

use crate::config::HostConfig;
use crate::render::{Snapshot, screen};
use anyhow::{Context, Result};
use crosses_core::{Coordinate, CoordinateParseError, GameSession};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Place(Coordinate),
    /// Throw the board away and start again.
    Restart,
    /// Print the accepted input forms.
    Help,
    /// Leave the loop.
    Quit,
}

impl FromStr for Command {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" | "restart" | "r" => Ok(Command::Restart),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => s.parse().map(Command::Place),
        }
    }
}

const HELP: &str = "Enter a cell as x,y (0-2), a keypad number 1-9, or a name like \"center\".\n\
                    Commands: new, help, quit";

/// Interactive host owning the current session.
#[derive(Debug)]
pub struct Shell<'a> {
    config: &'a HostConfig,
    session: GameSession,
}

impl<'a> Shell<'a> {
    /// Creates a shell with a fresh game.
    pub fn new(config: &'a HostConfig) -> Self {
        Self {
            config,
            session: GameSession::new(),
        }
    }

    /// Current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Applies one command. Returns false when the shell should stop.
    ///
    /// Rejected moves are reported to `output`; the session is kept.
    #[instrument(skip(self, output))]
    pub fn handle<W: Write>(&mut self, command: Command, output: &mut W) -> std::io::Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Restart => {
                self.session = self.session.restart();
                write!(output, "{}", screen(&self.session, self.config))?;
            }
            Command::Place(coordinate) => match self.session.play(coordinate) {
                Ok(next) => {
                    self.session = next;
                    write!(output, "{}", screen(&self.session, self.config))?;
                    if self.session.is_over() {
                        writeln!(output, "Type \"new\" to play again.")?;
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
        }
        Ok(true)
    }

    /// Reads commands from `input` until quit or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        info!("Game loop started");
        write!(output, "{}", screen(&self.session, self.config))?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let keep_going = match line.parse::<Command>() {
                Ok(command) => {
                    debug!(?command, "Command received");
                    self.handle(command, &mut output)?
                }
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    true
                }
            };
            output.flush()?;

            if !keep_going {
                break;
            }
        }

        info!("Game loop finished");
        Ok(())
    }
}

/// Plays `moves` from a fresh game and returns what to print.
///
/// With `json`, the output is a pretty-printed [`Snapshot`]; otherwise the
/// status line and board.
///
/// # Errors
///
/// Fails on the first move that does not parse or is illegal, naming its
/// 1-based position.
#[instrument(skip(config))]
pub fn replay(moves: &[String], config: &HostConfig, json: bool) -> Result<String> {
    let session = moves
        .iter()
        .enumerate()
        .try_fold(GameSession::new(), |session, (n, text)| {
            let coordinate = text
                .parse::<Coordinate>()
                .with_context(|| format!("move {} ({})", n + 1, text))?;
            session
                .play(coordinate)
                .with_context(|| format!("move {} ({})", n + 1, text))
        })?;

    info!(moves = moves.len(), outcome = %session.outcome(), "Replay finished");
    if json {
        Ok(serde_json::to_string_pretty(&Snapshot::new(&session, config))?)
    } else {
        Ok(screen(&session, config))
    }
}
