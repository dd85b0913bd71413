/// Which part of the word list the target is drawn from.
///
/// Observed gameplay variants disagree here, so it is configuration
/// rather than fixed behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetSampling {
    FullList,
    /// Bias toward the more common words at the front of the list.
    FirstHalf,
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub cols: i32,
    pub rows: i32,
    pub max_guesses: usize,
    /// Crash cap. Reaching it ends the session in `LostMaxCrashes`.
    pub max_crashes: u32,
    /// Minimum elapsed milliseconds between simulation steps.
    pub speed_ms: f64,
    pub countdown_seconds: u8,
    pub initial_pellets: usize,
    /// Probability that a spawned letter is drawn from the letters the
    /// target still needs, rather than uniformly from the alphabet.
    pub needed_letter_bias: f64,
    pub target_sampling: TargetSampling,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 12,
            rows: 16,
            max_guesses: 6,
            max_crashes: 10,
            speed_ms: 140.0,
            countdown_seconds: 3,
            initial_pellets: 7,
            needed_letter_bias: 0.6,
            target_sampling: TargetSampling::FullList,
        }
    }
}

impl GameConfig {
    /// Small grid with a short countdown, for tests that need fast crashes.
    pub fn small() -> Self {
        Self { cols: 6, rows: 6, countdown_seconds: 1, initial_pellets: 3, ..Self::default() }
    }
}
