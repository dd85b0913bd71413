//! Two-pass Wordle scoring with masking.
//!
//! Masking matters for repeated letters: a letter that appears once in the
//! target must not be credited as `Present` twice when the guess contains
//! it twice. Naive membership testing gets this wrong.

use crate::types::LetterScore;

pub const WORD_LEN: usize = 5;

/// Score `guess` against `target`. Both must be `WORD_LEN` uppercase chars.
pub fn score_guess(guess: &str, target: &str) -> [LetterScore; WORD_LEN] {
    debug_assert_eq!(guess.chars().count(), WORD_LEN);
    debug_assert_eq!(target.chars().count(), WORD_LEN);

    let mut g: [Option<char>; WORD_LEN] = [None; WORD_LEN];
    let mut t: [Option<char>; WORD_LEN] = [None; WORD_LEN];
    for (i, ch) in guess.chars().enumerate() {
        g[i] = Some(ch);
    }
    for (i, ch) in target.chars().enumerate() {
        t[i] = Some(ch);
    }

    let mut result = [LetterScore::Absent; WORD_LEN];

    // Pass 1: exact matches. Mask both sides so neither is counted again.
    for i in 0..WORD_LEN {
        if g[i].is_some() && g[i] == t[i] {
            result[i] = LetterScore::Correct;
            g[i] = None;
            t[i] = None;
        }
    }

    // Pass 2: presence. Each hit consumes the leftmost unmasked target
    // occurrence.
    for i in 0..WORD_LEN {
        let Some(ch) = g[i] else { continue };
        if let Some(j) = t.iter().position(|slot| *slot == Some(ch)) {
            result[i] = LetterScore::Present;
            t[j] = None;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LetterScore::{Absent, Correct, Present};

    #[test]
    fn self_score_is_all_correct() {
        for word in ["APPLE", "LEVEL", "CRANE", "LLAMA"] {
            assert_eq!(score_guess(word, word), [Correct; 5]);
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        assert_eq!(score_guess("XYZQW", "APPLE"), [Absent; 5]);
    }

    #[test]
    fn anagram_with_no_exact_match_is_all_present() {
        // Every letter of ALLOY occurs in LOYAL, none in place.
        assert_eq!(score_guess("ALLOY", "LOYAL"), [Present; 5]);
    }

    #[test]
    fn masking_handles_repeats_in_target_and_guess() {
        // target LEVEL, guess ELVES: V is exact; E, L, E find homes in the
        // remaining pool L,E,E,L; S is absent.
        assert_eq!(
            score_guess("ELVES", "LEVEL"),
            [Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn second_copy_in_guess_is_not_credited_twice() {
        // APPLE has one L. ALLEY's first L is present, the second must be
        // absent once the pool L is consumed.
        assert_eq!(
            score_guess("ALLEY", "APPLE"),
            [Correct, Present, Absent, Present, Absent]
        );
    }

    #[test]
    fn exact_match_consumes_target_letter_before_presence_pass() {
        // target ROBIN, guess ONION: the final N is exact and consumes
        // the only N, so the guess's other N is absent. The single O and
        // I are each credited once.
        assert_eq!(
            score_guess("ONION", "ROBIN"),
            [Present, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn every_embedded_word_scores_itself_perfect() {
        let list = crate::words::WordList::embedded();
        for word in list.words() {
            assert!(
                score_guess(word, word).iter().all(|s| *s == Correct),
                "self-score failed for {word}"
            );
        }
    }
}
