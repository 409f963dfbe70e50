//! One-level guess ordering.
//!
//! A guess scores the total size of the candidate sets it leaves behind,
//! summed over every possible solution. Lower is better. The ordering only
//! decides how soon the recursive search finds a strong guess to prune
//! against; it never affects which score the search reports.

use crate::bitset::CandidateSet;
use crate::dictionary::{members, Word};
use crate::filter::CandidateFilter;

/// Score credit for a guess that is itself a possible solution.
const CANDIDATE_BONUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess {
    pub guess: Word,
    pub score: usize,
    pub is_candidate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ranking {
    /// A guess that splits the candidates into singletons. `score` is already
    /// the final search score (100 per guess, averaged).
    Perfect { guess: Word, score: u32 },
    /// Every evaluated guess, best first.
    Ordered(Vec<ScoredGuess>),
}

/// Dictionary words ordered by how recently they were a perfect guess.
#[derive(Debug, Clone)]
pub struct RecentGuesses {
    order: Vec<Word>,
}

impl RecentGuesses {
    pub fn new(len: usize) -> Self {
        Self {
            order: (0..len).map(Word::from).collect(),
        }
    }

    /// Move `word` to the front.
    pub fn touch(&mut self, word: Word) {
        if let Some(pos) = self.order.iter().position(|&w| w == word) {
            self.order[..=pos].rotate_right(1);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.order.iter().copied()
    }
}

#[derive(Debug, Clone)]
pub struct GuessRanker {
    recent: RecentGuesses,
}

impl GuessRanker {
    pub fn new(dictionary_len: usize) -> Self {
        Self {
            recent: RecentGuesses::new(dictionary_len),
        }
    }

    pub fn recent(&self) -> &RecentGuesses {
        &self.recent
    }

    fn total_remaining(
        filter: &mut CandidateFilter,
        candidates: &CandidateSet,
        guess: Word,
    ) -> usize {
        members(candidates)
            .map(|solution| filter.narrowed_len(candidates, solution, guess))
            .sum()
    }

    /// Rank every dictionary word as a next guess against `candidates`.
    ///
    /// Candidates are tried first since a perfect guess is nearly always
    /// among them; the rest of the dictionary follows in most-recently
    /// perfect order. The first perfect guess ends the ranking.
    pub fn rank(&mut self, filter: &mut CandidateFilter, candidates: &CandidateSet) -> Ranking {
        let n = candidates.count();
        let mut ranked = Vec::with_capacity(candidates.capacity());

        for guess in members(candidates) {
            let total = Self::total_remaining(filter, candidates, guess);
            if total == n {
                let n = n as u32;
                return Ranking::Perfect {
                    guess,
                    score: (100 + 200 * (n - 1)) / n,
                };
            }
            ranked.push(ScoredGuess {
                guess,
                score: total.saturating_sub(CANDIDATE_BONUS),
                is_candidate: true,
            });
        }

        let mut perfect = None;
        for guess in self.recent.iter() {
            if candidates.contains(guess.index()) {
                continue;
            }
            let total = Self::total_remaining(filter, candidates, guess);
            if total <= n {
                perfect = Some(guess);
                break;
            }
            ranked.push(ScoredGuess {
                guess,
                score: total,
                is_candidate: false,
            });
        }
        if let Some(guess) = perfect {
            self.recent.touch(guess);
            return Ranking::Perfect { guess, score: 200 };
        }

        ranked.sort_by_key(|g| g.score);
        Ranking::Ordered(ranked)
    }
}
