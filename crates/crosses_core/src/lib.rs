//! Pure naughts and crosses game logic.
//!
//! This crate owns the board, move application, and win/draw detection.
//! It performs no I/O; a presentation layer renders the board and routes
//! move intents in.
//!
//! # Architecture
//!
//! - **Types**: [`Cell`], [`Player`], [`Board`], [`GameOutcome`]
//! - **Moves**: [`apply_move`] (copy-on-write) and [`new_game`]
//! - **Rules**: [`detect_win`], [`is_draw`], [`outcome`]
//! - **Session**: [`GameSession`] tracks turn order and history
//!
//! # Example
//!
//! ```
//! use crosses_core::{GameOutcome, GameSession, Player};
//!
//! let session = GameSession::new();
//! let session = session.play_index(4)?;
//! assert_eq!(session.turn(), Player::O);
//! assert_eq!(session.outcome(), GameOutcome::InProgress);
//! # Ok::<(), crosses_core::IllegalMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::{
    BoardParseError, CoordinateParseError, IllegalMove, InvalidSession, UnsupportedDimension,
};
pub use moves::{Move, apply_move, apply_move_at, new_game};
pub use position::Coordinate;
pub use rules::{WIN_LINES, detect_win, is_draw, is_full, outcome};
pub use session::GameSession;
pub use types::{Board, CELL_COUNT, Cell, DIMENSION, GameOutcome, Player};
