//! Precomputed per-letter word sets.
//!
//! Word indices are global to the dictionary, so one index built over the
//! full word list serves every candidate subset: a subset is narrowed by
//! intersecting with it instead of rebuilding an index per recursion level.

use log::debug;

use crate::bitset::BitSet;
use crate::dictionary::Letters;
use crate::feedback::{Clue, Color};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

#[derive(Debug, Clone)]
pub struct ConstraintIndex {
    len: usize,
    /// `positions[p * 26 + l]`: words with letter `l` at position `p`
    positions: Vec<BitSet>,
    /// `at_least[(k - 1) * 26 + l]`: words with `k` or more of letter `l`
    at_least: Vec<BitSet>,
}

impl ConstraintIndex {
    pub fn build(words: &[Letters]) -> Self {
        let len = words.len();
        let mut positions = vec![BitSet::new(len); WORD_LENGTH * ALPHABET_SIZE];
        let mut at_least = vec![BitSet::new(len); WORD_LENGTH * ALPHABET_SIZE];

        for (w, word) in words.iter().enumerate() {
            let mut counts = [0usize; ALPHABET_SIZE];
            for (p, &letter) in word.iter().enumerate() {
                positions[p * ALPHABET_SIZE + letter as usize].insert(w);
                counts[letter as usize] += 1;
            }
            for (letter, &count) in counts.iter().enumerate() {
                for k in 1..=count {
                    at_least[(k - 1) * ALPHABET_SIZE + letter].insert(w);
                }
            }
        }

        debug!("built constraint index over {} words", len);
        Self {
            len,
            positions,
            at_least,
        }
    }

    /// Words with `letter` at `position`.
    pub fn at_position(&self, position: usize, letter: u8) -> &BitSet {
        &self.positions[position * ALPHABET_SIZE + letter as usize]
    }

    /// Words containing `letter` at least `k` times, `None` when `k` is zero
    /// or exceeds the word length.
    pub fn with_at_least(&self, letter: u8, k: usize) -> Option<&BitSet> {
        if k == 0 || k > WORD_LENGTH {
            return None;
        }
        Some(&self.at_least[(k - 1) * ALPHABET_SIZE + letter as usize])
    }

    /// Every dictionary word consistent with `guess` having received `clue`.
    pub fn matching(&self, guess: &Letters, clue: &Clue) -> BitSet {
        let mut out = BitSet::full(self.len);

        for (p, &letter) in guess.iter().enumerate() {
            if clue.feedback.color(p) == Color::Correct {
                out.intersect_with(self.at_position(p, letter));
            }
        }

        for lc in &clue.at_least {
            match self.with_at_least(lc.letter, lc.count as usize) {
                Some(set) => out.intersect_with(set),
                None => return BitSet::new(self.len),
            }
        }

        for lc in &clue.at_most {
            if let Some(set) = self.with_at_least(lc.letter, lc.count as usize + 1) {
                out.difference_with(set);
            }
        }

        for (p, &letter) in guess.iter().enumerate() {
            if clue.feedback.color(p) != Color::Correct {
                out.difference_with(self.at_position(p, letter));
            }
        }

        out
    }
}
