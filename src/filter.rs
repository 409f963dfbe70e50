//! Narrowing candidate sets by feedback, with caching.
//!
//! The expensive part of a filter step, classifying and running the
//! constraint index over the whole dictionary, depends only on the
//! (solution, guess) pair. That result is cached once per pair and then
//! intersected with whatever subset the caller holds.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::bitset::CandidateSet;
use crate::dictionary::{Dictionary, Word};
use crate::feedback::{Clue, Feedback};

/// Feedback for a (solution, guess) pair together with every dictionary word
/// consistent with it.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub feedback: Feedback,
    pub matching: Arc<CandidateSet>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
pub struct CandidateFilter {
    dictionary: Arc<Dictionary>,
    by_pair: HashMap<(Word, Word), Outcome>,
    by_clue: HashMap<(Word, Feedback), Arc<CandidateSet>>,
    stats: FilterStats,
}

impl CandidateFilter {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            by_pair: HashMap::new(),
            by_clue: HashMap::new(),
            stats: FilterStats::default(),
        }
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    /// Dictionary words consistent with `guess` having received `feedback`.
    fn matching_all(&mut self, guess: Word, feedback: Feedback) -> Arc<CandidateSet> {
        let dictionary = &self.dictionary;
        self.by_clue
            .entry((guess, feedback))
            .or_insert_with(|| {
                let letters = dictionary.letters(guess);
                let clue = Clue::new(letters, feedback);
                Arc::new(dictionary.constraint_index().matching(letters, &clue))
            })
            .clone()
    }

    /// Classification of `guess` against `solution` and its dictionary-wide
    /// matching set.
    pub fn outcome(&mut self, solution: Word, guess: Word) -> Outcome {
        if let Some(outcome) = self.by_pair.get(&(solution, guess)) {
            self.stats.hits += 1;
            return outcome.clone();
        }
        self.stats.misses += 1;
        let feedback = Feedback::classify(
            self.dictionary.letters(solution),
            self.dictionary.letters(guess),
        );
        let matching = self.matching_all(guess, feedback);
        let outcome = Outcome { feedback, matching };
        self.by_pair.insert((solution, guess), outcome.clone());
        outcome
    }

    /// Subset of `candidates` still possible after guessing `guess` when the
    /// solution is `solution`.
    pub fn narrow(
        &mut self,
        candidates: &CandidateSet,
        solution: Word,
        guess: Word,
    ) -> CandidateSet {
        self.outcome(solution, guess)
            .matching
            .intersection(candidates)
    }

    /// `narrow(..).count()` without building the set.
    pub fn narrowed_len(
        &mut self,
        candidates: &CandidateSet,
        solution: Word,
        guess: Word,
    ) -> usize {
        self.outcome(solution, guess)
            .matching
            .intersection_count(candidates)
    }

    /// Subset of `candidates` consistent with `guess` having received
    /// `feedback`.
    pub fn filter(
        &mut self,
        candidates: &CandidateSet,
        guess: Word,
        feedback: Feedback,
    ) -> CandidateSet {
        self.matching_all(guess, feedback).intersection(candidates)
    }
}
