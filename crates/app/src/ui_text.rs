//! Text formatting for the status line and side panel.

use crate::{format_seed, format_snapshot_hash};
use core::{CountdownReason, Game, Phase};

pub fn status_text(game: &Game) -> String {
    let state = game.state();
    match state.phase {
        Phase::Countdown { reason: CountdownReason::Starting, seconds_left } => {
            format!("Starting in {seconds_left}...")
        }
        Phase::Countdown { reason: CountdownReason::Resuming, seconds_left } => {
            format!(
                "Crash ({}/{}). Resuming in {seconds_left}...",
                state.crash_count,
                game.config().max_crashes
            )
        }
        Phase::Running => "Collect letters to spell your guess.".to_string(),
        Phase::Paused => "Paused (Space to resume)".to_string(),
        Phase::Won => {
            format!("You solved it! Crashes: {}. N for a new word.", state.crash_count)
        }
        Phase::LostExhausted => {
            format!("Out of guesses. The word was {}. N for a new word.", state.target)
        }
        Phase::LostMaxCrashes => {
            format!("Too many crashes. The word was {}. N for a new word.", state.target)
        }
    }
}

/// The letter buffer as five slots, collected letters first and
/// underscores for the rest.
pub fn buffer_text(pending: &[char]) -> String {
    let mut slots: Vec<String> = pending.iter().map(|c| c.to_string()).collect();
    while slots.len() < 5 {
        slots.push("_".to_string());
    }
    slots.join(" ")
}

pub fn stats_lines(game: &Game, run_seed: u32) -> Vec<String> {
    let state = game.state();
    vec![
        format!("Seed: {}", format_seed(run_seed)),
        format!("Guesses: {}/{}", state.guesses.len(), game.config().max_guesses),
        format!("Crashes: {}/{}", state.crash_count, game.config().max_crashes),
        format!("Longest snake: {}", state.max_snake_len),
        format!("Snapshot: {}", format_snapshot_hash(game.snapshot_hash())),
    ]
}
