//! Minimax-average guess search.
//!
//! Scores are in hundredths of a guess: a candidate set scoring 150 is solved
//! in 1.5 guesses on average by its best strategy. The search is a depth-first
//! branch and bound. Guesses are tried in ranked order, and a guess is
//! abandoned as soon as even its most optimistic completion cannot beat the
//! best guess already confirmed.
//!
//! All caches live in a [`Session`]. A session is owned by one caller, so
//! independent searches can run in parallel, each with its own session.

use std::sync::Arc;

use hashbrown::HashMap;
use log::{debug, warn};

use crate::bitset::CandidateSet;
use crate::dictionary::{members, Dictionary, Word};
use crate::error::{InvariantViolation, Result};
use crate::filter::{CandidateFilter, FilterStats};
use crate::ranker::{GuessRanker, Ranking, ScoredGuess};

/// Cost of one guess.
pub const GUESS_COST: u32 = 100;

/// Score of a candidate set for which no strategy was found within the depth
/// ceiling. Large enough to lose every comparison, small enough to add to.
pub const INFINITE_SCORE: u32 = 1_000_000;

/// Score of a two-word set: guess either, one or two guesses.
const PAIR_SCORE: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Recursion deeper than this gives up on the branch.
    pub max_depth: usize,
    /// How many guesses from the ranked order are explored per set.
    pub max_ranked_guesses: usize,
    /// A new best found past this rank is logged.
    pub late_improvement: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 17,
            max_ranked_guesses: 150,
            late_improvement: 110,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries into the guess scoring loop.
    pub expansions: u64,
    pub memo_hits: u64,
    pub depth_exceeded: u64,
}

/// The search's answer for one candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestGuess {
    pub guess: Word,
    pub score: u32,
    /// No strategy fit under the depth ceiling; `guess` is only a fallback.
    pub exhausted: bool,
}

impl BestGuess {
    pub fn expected_guesses(&self) -> f64 {
        self.score as f64 / GUESS_COST as f64
    }
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    score: u32,
    guess: Option<Word>,
    /// False when a depth cutoff influenced the result.
    exact: bool,
}

impl Scored {
    const EXHAUSTED: Self = Self {
        score: INFINITE_SCORE,
        guess: None,
        exact: false,
    };

    fn found(score: u32, guess: Word) -> Self {
        Self {
            score,
            guess: Some(guess),
            exact: true,
        }
    }
}

enum Trial {
    Scored { score: u32, exact: bool },
    Pruned { exact: bool },
    /// Some solution leaves the candidate set unchanged.
    Useless,
    Exhausted,
}

pub struct Session {
    dictionary: Arc<Dictionary>,
    config: SearchConfig,
    filter: CandidateFilter,
    ranker: GuessRanker,
    memo: HashMap<CandidateSet, (u32, Word)>,
    stats: SearchStats,
}

impl Session {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self::with_config(dictionary, SearchConfig::default())
    }

    pub fn with_config(dictionary: Arc<Dictionary>, config: SearchConfig) -> Self {
        Self {
            filter: CandidateFilter::new(Arc::clone(&dictionary)),
            ranker: GuessRanker::new(dictionary.len()),
            dictionary,
            config,
            memo: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn filter_stats(&self) -> FilterStats {
        self.filter.stats()
    }

    pub fn filter_mut(&mut self) -> &mut CandidateFilter {
        &mut self.filter
    }

    /// Number of candidate sets with a memoized result.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// One-level ranking of every dictionary word against `candidates`.
    pub fn rank(&mut self, candidates: &CandidateSet) -> Ranking {
        self.ranker.rank(&mut self.filter, candidates)
    }

    /// The guess minimizing the expected number of guesses to solve
    /// `candidates`.
    pub fn best_guess(&mut self, candidates: &CandidateSet) -> Result<BestGuess> {
        let scored = self.search(candidates, 0)?;
        let filter = self.filter.stats();
        debug!(
            "search over {} candidates: {:?}, outcome cache {} hits / {} misses, {} memo entries",
            candidates.count(),
            self.stats,
            filter.hits,
            filter.misses,
            self.memo.len()
        );
        match scored.guess {
            Some(guess) => Ok(BestGuess {
                guess,
                score: scored.score,
                exhausted: false,
            }),
            None => {
                let guess = candidates
                    .first()
                    .map(Word::from)
                    .ok_or(InvariantViolation::EmptyCandidates)?;
                warn!(
                    "no strategy within depth {} for {} candidates, falling back to {}",
                    self.config.max_depth,
                    candidates.count(),
                    self.dictionary.string(guess)
                );
                Ok(BestGuess {
                    guess,
                    score: INFINITE_SCORE,
                    exhausted: true,
                })
            }
        }
    }

    /// A result already computed for `candidates`, without searching.
    pub fn cached_score(&self, candidates: &CandidateSet) -> Result<BestGuess> {
        let first = candidates.first().map(Word::from);
        let (score, guess) = match (candidates.count(), first) {
            (_, None) => return Err(InvariantViolation::EmptyCandidates.into()),
            (1, Some(w)) => (GUESS_COST, w),
            (2, Some(w)) => (PAIR_SCORE, w),
            _ => *self
                .memo
                .get(candidates)
                .ok_or(InvariantViolation::ScoreNotComputed)?,
        };
        Ok(BestGuess {
            guess,
            score,
            exhausted: false,
        })
    }

    fn search(&mut self, candidates: &CandidateSet, depth: usize) -> Result<Scored> {
        let n = candidates.count();
        let first = match candidates.first() {
            Some(i) => Word::from(i),
            None => return Err(InvariantViolation::EmptyCandidates.into()),
        };
        if n == 1 {
            return Ok(Scored::found(GUESS_COST, first));
        }
        if n == 2 {
            return Ok(Scored::found(PAIR_SCORE, first));
        }
        if let Some(&(score, guess)) = self.memo.get(candidates) {
            self.stats.memo_hits += 1;
            return Ok(Scored::found(score, guess));
        }
        if depth > self.config.max_depth {
            self.stats.depth_exceeded += 1;
            warn!(
                "depth {} exceeded with {} candidates: {:?}",
                depth,
                n,
                self.dictionary.strings(candidates)
            );
            return Ok(Scored::EXHAUSTED);
        }
        self.stats.expansions += 1;

        let mut guesses: Vec<ScoredGuess> = match self.ranker.rank(&mut self.filter, candidates) {
            Ranking::Perfect { guess, score } => {
                self.memo.insert(candidates.clone(), (score, guess));
                return Ok(Scored::found(score, guess));
            }
            Ranking::Ordered(list) => list,
        };
        guesses.truncate(self.config.max_ranked_guesses);
        // stable: candidates first, ranked order kept within each group
        guesses.sort_by_key(|g| !g.is_candidate);

        let count = n as u32;
        let candidate_floor = (GUESS_COST + 2 * GUESS_COST * (count - 1)) / count;
        let mut best: Option<(u32, Word)> = None;
        let mut exact = true;

        for (rank, ranked) in guesses.iter().enumerate() {
            let floor = if ranked.is_candidate {
                candidate_floor
            } else {
                2 * GUESS_COST
            };
            let best_score = best.map_or(INFINITE_SCORE, |(s, _)| s);
            if best_score <= floor {
                break;
            }
            let trial = self.try_guess(
                candidates,
                ranked.guess,
                ranked.is_candidate,
                best_score,
                depth,
            )?;
            match trial {
                Trial::Scored { score, exact: e } => {
                    exact &= e;
                    if score < best_score {
                        if rank > self.config.late_improvement {
                            debug!(
                                "late improvement {} -> {} at rank {} depth {}: {} for {} words",
                                best_score,
                                score,
                                rank,
                                depth,
                                self.dictionary.string(ranked.guess),
                                n
                            );
                        }
                        best = Some((score, ranked.guess));
                    }
                }
                Trial::Pruned { exact: e } => exact &= e,
                Trial::Useless => {}
                Trial::Exhausted => exact = false,
            }
        }

        match best {
            Some((score, guess)) => {
                if exact {
                    self.memo.insert(candidates.clone(), (score, guess));
                }
                Ok(Scored {
                    score,
                    guess: Some(guess),
                    exact,
                })
            }
            None => Ok(Scored::EXHAUSTED),
        }
    }

    /// Average cost of `guess` over every solution in `candidates`, or why it
    /// was given up on. `bound` is the best score confirmed so far.
    fn try_guess(
        &mut self,
        candidates: &CandidateSet,
        guess: Word,
        is_candidate: bool,
        bound: u32,
        depth: usize,
    ) -> Result<Trial> {
        let n = candidates.count();
        let mut total: u64 = 0;
        let mut correct_pending = is_candidate;
        let mut exact = true;

        for (seen, solution) in members(candidates).enumerate() {
            let matching = self.filter.narrow(candidates, solution, guess);
            let m = matching.count();
            if m == 0 {
                return Err(InvariantViolation::EmptyCandidates.into());
            }
            if m == n {
                return Ok(Trial::Useless);
            }

            let cost = if m == 1 && matching.contains(guess.index()) {
                correct_pending = false;
                GUESS_COST
            } else {
                let sub = self.search(&matching, depth + 1)?;
                if sub.guess.is_none() {
                    return Ok(Trial::Exhausted);
                }
                exact &= sub.exact;
                GUESS_COST + sub.score
            };
            total += cost as u64;

            // unseen solutions: at best 2 guesses each, 1 for the guess itself
            let unseen = (n - seen - 1) as u64;
            let mut optimistic = total + 2 * GUESS_COST as u64 * unseen;
            if correct_pending {
                optimistic = optimistic.saturating_sub(GUESS_COST as u64);
            }
            if optimistic / n as u64 > bound as u64 {
                return Ok(Trial::Pruned { exact });
            }
        }

        Ok(Trial::Scored {
            score: (total / n as u64) as u32,
            exact,
        })
    }
}
