//! Game rules for naughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates
//! its input or remembers earlier results.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::outcome;
pub use win::{WIN_LINES, detect_win};
