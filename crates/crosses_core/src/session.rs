//! A single game session: board, whose turn it is, and the moves so far.
//!
//! Sessions are values. [`GameSession::play`] returns the successor and
//! leaves the receiver untouched, so a host can keep the previous state
//! around or drop it.

use crate::error::{IllegalMove, InvalidSession};
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::moves::{Move, apply_move};
use crate::position::Coordinate;
use crate::rules::{detect_win, outcome};
use crate::types::{Board, DIMENSION, GameOutcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete state of one game.
///
/// Deserializing checks every session invariant, so a decoded session is
/// one that legal play could have reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    board: Board,
    turn: Player,
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            history: Vec::new(),
        }
    }

    /// Assembles a session without checking it.
    pub(crate) fn from_parts(board: Board, turn: Player, history: Vec<Move>) -> Self {
        Self {
            board,
            turn,
            history,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the winner once the game is won.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome derived from the current board.
    ///
    /// The turn does not advance after a winning move, so a completed line
    /// belongs to [`GameSession::turn`].
    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board, self.turn)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().winner()
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !self.outcome().is_in_progress()
    }

    /// Cells a move may target right now. Empty once the game is over.
    pub fn available_moves(&self) -> Vec<Coordinate> {
        if self.is_over() {
            return Vec::new();
        }
        Coordinate::available(&self.board)
    }

    /// Plays the current player's mark at `coordinate`.
    ///
    /// The turn passes to the opponent unless the move wins. A drawing move
    /// still passes the turn.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::GameOver`] once the game has a result, otherwise
    /// whatever [`apply_move`] rejects.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn play(&self, coordinate: Coordinate) -> Result<Self, IllegalMove> {
        if self.is_over() {
            warn!(outcome = %self.outcome(), "Move rejected: game is over");
            return Err(IllegalMove::GameOver);
        }

        let board = apply_move(
            &self.board,
            coordinate.x(),
            coordinate.y(),
            DIMENSION,
            self.turn,
        )?;

        let won = detect_win(&board);
        let mut history = self.history.clone();
        history.push(Move::new(self.turn, coordinate));

        let next = Self {
            board,
            turn: if won { self.turn } else { self.turn.opponent() },
            history,
        };

        debug_assert!(
            next.check_invariants().is_ok(),
            "Session invariants violated after {}",
            coordinate
        );

        match next.outcome() {
            GameOutcome::Win(winner) => info!(%winner, moves = next.history.len(), "Game won"),
            GameOutcome::Draw => info!(moves = next.history.len(), "Game drawn"),
            GameOutcome::InProgress => debug!(next = %next.turn, "Turn passed"),
        }

        Ok(next)
    }

    /// Plays at a row-major index; see [`GameSession::play`].
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::play`].
    pub fn play_index(&self, index: usize) -> Result<Self, IllegalMove> {
        self.play(Coordinate::new(index % DIMENSION, index / DIMENSION))
    }

    /// Full reinitialization: empty board, X to move, no history.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Self {
        info!(moves = self.history.len(), "Game restarted");
        Self::new()
    }

    /// Builds a session by playing `moves` from a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal move.
    #[instrument(skip(moves))]
    pub fn replay<I>(moves: I) -> Result<Self, IllegalMove>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        moves
            .into_iter()
            .try_fold(Self::new(), |session, coordinate| session.play(coordinate))
    }

    /// Checks every session invariant.
    ///
    /// # Errors
    ///
    /// Lists each violated invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(self).inspect_err(|violations| {
            for violation in violations {
                warn!(%violation, "Session invariant violated");
            }
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`GameSession`].
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    turn: Player,
    history: Vec<Move>,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = InvalidSession;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let session = Self::from_parts(record.board, record.turn, record.history);
        session
            .check_invariants()
            .map_err(|violations| InvalidSession { violations })?;
        Ok(session)
    }
}
