pub mod frame_input;
pub mod render;
pub mod seed;
pub mod ui_text;

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u32) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a `SessionOutcome` to its reason code string.
pub fn outcome_code(outcome: core::SessionOutcome) -> &'static str {
    match outcome {
        core::SessionOutcome::Won => "WIN_WORD_SOLVED",
        core::SessionOutcome::LostExhausted => "LOSE_GUESSES_EXHAUSTED",
        core::SessionOutcome::LostMaxCrashes => "LOSE_CRASH_CAP",
    }
}
