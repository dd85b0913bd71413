//! Headless reconstruction of a session from its input journal.

use crate::config::GameConfig;
use crate::game::Game;
use crate::journal::{InputJournal, InputPayload};
use crate::types::{AdvanceStopReason, SessionOutcome};
use crate::words::WordList;

/// Safety bound on simulated units. A session always terminates on its
/// own (win, guess exhaustion, or the crash cap), so hitting this bound
/// means the journal or the engine misbehaved.
const MAX_REPLAY_UNITS: u64 = 1_000_000;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// Inputs are not ordered by their step boundary.
    OutOfOrderInput { seq: u64 },
    /// The safety bound was hit before the session reached a terminal
    /// phase.
    BudgetExhausted,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_outcome: SessionOutcome,
    pub final_step: u64,
    pub final_snapshot_hash: u64,
}

pub fn replay_to_end(
    words: &WordList,
    config: &GameConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.seed, words.clone(), config.clone());

    let mut pending = journal.inputs.iter().peekable();
    let mut last_boundary = 0u64;
    let mut units = 0u64;

    loop {
        // Feed every input recorded at the current step boundary.
        while let Some(record) = pending.peek() {
            let InputPayload::SetDirection { at_step, dir } = record.payload;
            if at_step < last_boundary {
                return Err(ReplayError::OutOfOrderInput { seq: record.seq });
            }
            if at_step > game.current_step() {
                break;
            }
            last_boundary = at_step;
            game.set_direction(dir);
            pending.next();
        }

        let result = game.advance(1);
        units += u64::from(result.simulated_units);

        match result.stop_reason {
            AdvanceStopReason::Finished(outcome) => {
                return Ok(ReplayResult {
                    final_outcome: outcome,
                    final_step: game.current_step(),
                    final_snapshot_hash: game.snapshot_hash(),
                });
            }
            AdvanceStopReason::PausedAtBoundary => {
                // Journals never pause; resume and keep going.
                let _ = game.resume();
            }
            AdvanceStopReason::BudgetExhausted => {}
        }

        if units > MAX_REPLAY_UNITS {
            return Err(ReplayError::BudgetExhausted);
        }
    }
}
