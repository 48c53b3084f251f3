//! Text rendering of a session for the terminal.

use crate::config::HostConfig;
use crosses_core::{GameOutcome, GameSession};
use serde::Serialize;
use tracing::instrument;

/// Status line shown above the board.
///
/// `"<P>'s turn"`, `"<P> wins"` or the draw message, per `config`.
#[instrument(skip_all)]
pub fn status_line(session: &GameSession, config: &HostConfig) -> String {
    match session.outcome() {
        GameOutcome::InProgress => format!("{}{}", session.turn(), config.turn_suffix()),
        GameOutcome::Win(winner) => format!("{}{}", winner, config.winner_suffix()),
        GameOutcome::Draw => config.draw_message().clone(),
    }
}

/// Status line followed by the board.
#[instrument(skip_all)]
pub fn screen(session: &GameSession, config: &HostConfig) -> String {
    format!(
        "{}\n\n{}\n",
        status_line(session, config),
        session.board().render(*config.show_hints())
    )
}

/// JSON view of a finished replay.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// Final outcome.
    pub outcome: GameOutcome,
    /// Status line as the terminal would show it.
    pub status: String,
    /// The session itself.
    pub session: &'a GameSession,
}

impl<'a> Snapshot<'a> {
    /// Captures `session` for output.
    pub fn new(session: &'a GameSession, config: &HostConfig) -> Self {
        Self {
            outcome: session.outcome(),
            status: status_line(session, config),
            session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosses_core::Coordinate;

    #[test]
    fn test_status_line_messages() {
        let config = HostConfig::default();
        let session = GameSession::new();
        assert_eq!(status_line(&session, &config), "X's turn");

        let session = session.play(Coordinate::new(0, 0)).unwrap();
        assert_eq!(status_line(&session, &config), "O's turn");

        let won = GameSession::replay([
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
            Coordinate::new(2, 0),
        ])
        .unwrap();
        assert_eq!(status_line(&won, &config), "X wins");
    }

    #[test]
    fn test_screen_contains_board() {
        let screen = screen(&GameSession::new(), &HostConfig::default());
        assert!(screen.starts_with("X's turn\n\n1|2|3"));
    }
}
