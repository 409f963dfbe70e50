//! Stateful solver for one game in progress.
//!
//! `WordleSolver` keeps the current candidate set alongside a search
//! [`Session`], so feedback can be applied turn by turn and the session's
//! caches carry over between turns.

use std::sync::Arc;

use crate::bitset::CandidateSet;
use crate::dictionary::Dictionary;
use crate::error::{InputError, Result};
use crate::feedback::Feedback;
use crate::game;
use crate::history::{self, History};
use crate::search::{SearchConfig, Session};

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: String,
    pub score: u32,
    pub expected_guesses: f64,
    pub is_possible_answer: bool,
}

pub struct WordleSolver {
    session: Session,
    possible_answers: CandidateSet,
}

impl WordleSolver {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self::with_config(dictionary, SearchConfig::default())
    }

    pub fn with_config(dictionary: Arc<Dictionary>, config: SearchConfig) -> Self {
        Self {
            possible_answers: dictionary.all(),
            session: Session::with_config(dictionary, config),
        }
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        self.session.dictionary()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn remaining_count(&self) -> usize {
        self.possible_answers.count()
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.possible_answers
    }

    pub fn possible_answers(&self) -> Vec<&str> {
        self.session.dictionary().strings(&self.possible_answers)
    }

    pub fn reset(&mut self) {
        self.possible_answers = self.session.dictionary().all();
    }

    /// Narrow the candidates by one turn. An empty result is rejected and
    /// leaves the solver unchanged.
    pub fn apply_feedback(&mut self, guess: &str, feedback: Feedback) -> Result<()> {
        let guess = self.session.dictionary().lookup(guess)?;
        history::check_order(self.session.dictionary(), guess, feedback)?;
        let narrowed = self
            .session
            .filter_mut()
            .filter(&self.possible_answers, guess, feedback);
        if narrowed.is_empty() {
            return Err(InputError::NoCandidates.into());
        }
        self.possible_answers = narrowed;
        Ok(())
    }

    /// Restart from the full dictionary and apply every turn of `history`.
    pub fn apply_history(&mut self, history: &History) -> Result<()> {
        let all = self.session.dictionary().all();
        self.possible_answers = history.candidates(self.session.filter_mut(), &all)?;
        Ok(())
    }

    pub fn find_best_guess(&mut self) -> Result<Option<GuessAnalysis>> {
        if self.possible_answers.is_empty() {
            return Ok(None);
        }
        let best = self.session.best_guess(&self.possible_answers)?;
        Ok(Some(GuessAnalysis {
            word: self
                .session
                .dictionary()
                .string(best.guess)
                .to_string(),
            score: best.score,
            expected_guesses: best.expected_guesses(),
            is_possible_answer: self.possible_answers.contains(best.guess.index()),
        }))
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking).
    /// Returns every guess with the feedback it received; the last one is
    /// always the target.
    pub fn solve_for_target(&mut self, target: &str) -> Result<Vec<(String, Feedback)>> {
        let dictionary = Arc::clone(self.session.dictionary());
        let solution = dictionary.lookup(target)?;
        let guesses = game::simulate(&mut self.session, solution, &[])?;
        Ok(guesses
            .into_iter()
            .map(|guess| {
                let feedback =
                    Feedback::classify(dictionary.letters(solution), dictionary.letters(guess));
                (dictionary.string(guess).to_string(), feedback)
            })
            .collect())
    }

    /// Get distribution of guess counts across all words
    pub fn benchmark_guess_distribution(&self) -> Result<Vec<(usize, usize)>> {
        let dictionary = self.session.dictionary();
        game::guess_distribution(dictionary, self.session.config(), &dictionary.all(), &[])
    }

    /// Calculate the average number of guesses needed to solve all words
    pub fn benchmark_average_guesses(&self) -> Result<f64> {
        let distribution = self.benchmark_guess_distribution()?;
        let games: usize = distribution.iter().map(|(_, c)| c).sum();
        let guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
        Ok(guesses as f64 / games.max(1) as f64)
    }
}
