use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn stepped(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrashCause {
    Wall,
    SelfHit,
}

/// Wordle-style per-letter feedback after masking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterScore {
    Correct,
    Present,
    Absent,
}

/// One committed guess. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: String,
    pub result: [LetterScore; 5],
}

impl GuessRecord {
    pub fn is_win(&self) -> bool {
        self.result.iter().all(|s| *s == LetterScore::Correct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownReason {
    Starting,
    Resuming,
}

/// Session lifecycle phase. Terminal phases freeze the simulation;
/// only `new_game` exits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Countdown { reason: CountdownReason, seconds_left: u8 },
    Running,
    Paused,
    Won,
    LostExhausted,
    LostMaxCrashes,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::LostExhausted | Self::LostMaxCrashes)
    }

    pub fn outcome(self) -> Option<SessionOutcome> {
        match self {
            Self::Won => Some(SessionOutcome::Won),
            Self::LostExhausted => Some(SessionOutcome::LostExhausted),
            Self::LostMaxCrashes => Some(SessionOutcome::LostMaxCrashes),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    LostExhausted,
    LostMaxCrashes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    CountdownStarted { reason: CountdownReason },
    LetterCollected { letter: char },
    GuessCommitted { word: String, result: [LetterScore; 5] },
    Crashed { cause: CrashCause, crash_count: u32 },
    SessionEnded { outcome: SessionOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NotRunning,
    NotPaused,
}

#[derive(Clone, Debug)]
pub enum AdvanceStopReason {
    Finished(SessionOutcome),
    PausedAtBoundary,
    BudgetExhausted,
}

#[derive(Clone, Debug)]
pub struct AdvanceResult {
    pub simulated_units: u32,
    pub stop_reason: AdvanceStopReason,
}
