//! Alternating turns: X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Player, detect_win};

/// Invariant: history starts with X and never repeats a player, and the
/// turn follows from the last move.
///
/// After a winning move the turn stays with the mover; otherwise it belongs
/// to the mover's opponent. With no history, X is to move.
pub struct AlternatingTurns;

impl Invariant<GameSession> for AlternatingTurns {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let Some(last) = history.last() else {
            return session.turn() == Player::X;
        };

        if history[0].player != Player::X {
            return false;
        }

        let expected_turn = if detect_win(session.board()) {
            last.player
        } else {
            last.player.opponent()
        };

        session.turn() == expected_turn
            && history
                .windows(2)
                .all(|pair| pair[0].player != pair[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
