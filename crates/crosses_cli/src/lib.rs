//! Terminal host for naughts and crosses.
//!
//! Renders a [`GameSession`](crosses_core::GameSession), turns typed input
//! into moves, and prints the status line. All game rules live in
//! `crosses_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod render;
mod shell;

pub use config::{ConfigError, HostConfig};
pub use render::{Snapshot, screen, status_line};
pub use shell::{Command, Shell, replay};
