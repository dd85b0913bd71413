//! In-memory record of accepted directional inputs.
//!
//! A session is a pure function of its seed, its config, and this input
//! sequence, which is what the replay harness and the determinism tests
//! lean on. There is deliberately no durable storage behind it.

use serde::{Deserialize, Serialize};

use crate::types::Direction;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u32,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum InputPayload {
    /// A directional intent accepted while the session was at step
    /// boundary `at_step`.
    SetDirection { at_step: u64, dir: Direction },
}

impl InputJournal {
    pub fn new(seed: u32) -> Self {
        Self { format_version: 1, seed, inputs: Vec::new() }
    }

    pub fn append_direction(&mut self, at_step: u64, dir: Direction) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload: InputPayload::SetDirection { at_step, dir } });
    }
}
