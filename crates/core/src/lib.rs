pub mod board;
pub mod config;
pub mod game;
pub mod journal;
pub mod replay;
pub mod rng;
pub mod score;
pub mod types;
pub mod words;

pub use board::{Board, Pellet, PelletId, Pellets, Snake};
pub use config::{GameConfig, TargetSampling};
pub use game::{Game, SessionState};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::*;
pub use rng::Lcg;
pub use types::*;
pub use words::WordList;
