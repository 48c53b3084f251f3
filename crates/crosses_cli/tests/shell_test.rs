//! Tests for the interactive game loop.

use crosses_cli::{HostConfig, Shell};
use crosses_core::{GameOutcome, Player};
use std::io::Cursor;

fn run(config: &HostConfig, input: &str) -> (String, GameOutcome) {
    let mut shell = Shell::new(config);
    let mut output = Vec::new();
    shell.run(Cursor::new(input), &mut output).unwrap();
    let outcome = shell.session().outcome();
    (String::from_utf8(output).unwrap(), outcome)
}

#[test]
fn test_x_wins_on_diagonal() {
    let config = HostConfig::default();
    let (output, outcome) = run(&config, "0,0\n1,0\n1,1\n2,0\n2,2\n");
    assert_eq!(outcome, GameOutcome::Win(Player::X));
    assert!(output.contains("X wins"));
    assert!(output.contains("Type \"new\" to play again."));
}

#[test]
fn test_moves_after_win_are_rejected() {
    let config = HostConfig::default();
    let (output, _) = run(&config, "1\n4\n2\n5\n3\n9\n");
    assert!(output.contains("X wins"));
    assert!(output.contains("the game is already over"));
}

#[test]
fn test_draw_message() {
    let config = HostConfig::default();
    let (output, outcome) = run(&config, "1\n2\n3\n4\n5\n7\n6\n9\n8\n");
    assert_eq!(outcome, GameOutcome::Draw);
    assert!(output.contains("\nDraw\n") || output.starts_with("Draw"));
}

#[test]
fn test_restart_and_quit() {
    let config = HostConfig::default();
    let (output, outcome) = run(&config, "5\nnew\nquit\n1\n");
    assert_eq!(outcome, GameOutcome::InProgress);
    assert_eq!(output.matches("X's turn").count(), 2);
}

#[test]
fn test_bad_input_reported() {
    let config = HostConfig::default();
    let (output, _) = run(&config, "banana\n4,4\n");
    assert!(output.contains("Invalid coordinate"));
    assert!(output.contains("off the board"));
}
