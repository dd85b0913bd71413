//! Word source for target selection.
//!
//! The list is an external data dependency. A too-small or malformed list
//! is not fatal: the embedded fallback list is substituted and the caller
//! can surface a warning via `used_fallback`.

use crate::config::TargetSampling;
use crate::rng::Lcg;

/// Minimum usable list size before the fallback kicks in.
const MIN_WORDS: usize = 10;

/// Embedded fallback list, uppercase 5-letter words.
const FALLBACK_WORDS: &[&str] = &[
    "APPLE", "BEACH", "BRAVE", "BREAD", "CHAIR", "CLOUD", "CRANE", "DANCE", "DREAM", "EARTH",
    "FLAME", "FROST", "GHOST", "GLASS", "GRAPE", "GREEN", "HEART", "HOUSE", "LEMON", "LIGHT",
    "MANGO", "MUSIC", "NIGHT", "OCEAN", "PIANO", "PLANT", "QUIET", "RIVER", "ROBIN", "SHARP",
    "SMILE", "SNAKE", "SOLAR", "SPICE", "STONE", "STORM", "SWEET", "TIGER", "TRAIN", "WHEAT",
];

#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
    used_fallback: bool,
}

impl WordList {
    /// Build a list from caller-supplied words, case-insensitively.
    /// Entries that are not exactly five ASCII letters are dropped.
    pub fn from_words<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = raw
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| w.len() == 5 && w.bytes().all(|b| b.is_ascii_uppercase()))
            .collect();

        if words.len() < MIN_WORDS {
            return Self::embedded_fallback();
        }
        Self { words, used_fallback: false }
    }

    /// The embedded list, used directly by the app when no external list
    /// is wired in.
    pub fn embedded() -> Self {
        Self { words: FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect(), used_fallback: false }
    }

    fn embedded_fallback() -> Self {
        Self { words: FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect(), used_fallback: true }
    }

    /// True when the supplied list was unusable and the fallback replaced it.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draw one target word via the session RNG.
    pub fn pick_target(&self, rng: &mut Lcg, sampling: TargetSampling) -> &str {
        let pool = match sampling {
            TargetSampling::FullList => self.words.len(),
            TargetSampling::FirstHalf => (self.words.len() / 2).max(1),
        };
        &self.words[rng.index(pool)]
    }
}
