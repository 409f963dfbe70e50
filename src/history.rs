//! Guess/feedback history entered by a player.
//!
//! Everything here is validated before it reaches the filter, so the search
//! core only ever sees dictionary words and well-formed feedback.

use crate::bitset::CandidateSet;
use crate::dictionary::{Dictionary, Word};
use crate::error::{InputError, Result};
use crate::feedback::Feedback;
use crate::filter::CandidateFilter;
use crate::WORD_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    turns: Vec<(Word, Feedback)>,
}

impl History {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Parse `[guess, feedback, guess, feedback, ...]`.
    pub fn from_args<S: AsRef<str>>(dictionary: &Dictionary, args: &[S]) -> Result<Self> {
        if args.len() % 2 != 0 {
            return Err(InputError::UnpairedHistory(args.len()).into());
        }
        let mut history = Self::new();
        for pair in args.chunks_exact(2) {
            history.push_str(dictionary, pair[0].as_ref(), pair[1].as_ref())?;
        }
        Ok(history)
    }

    /// Append a turn as is. Text input goes through [`History::push_str`],
    /// which validates it first.
    pub fn push(&mut self, guess: Word, feedback: Feedback) {
        self.turns.push((guess, feedback));
    }

    pub fn push_str(&mut self, dictionary: &Dictionary, guess: &str, feedback: &str) -> Result<()> {
        let guess = dictionary.lookup(&guess.to_lowercase())?;
        let feedback = Feedback::parse(feedback)
            .ok_or_else(|| InputError::MalformedFeedback(feedback.to_string(), WORD_LENGTH))?;
        check_order(dictionary, guess, feedback)?;
        self.push(guess, feedback);
        Ok(())
    }

    pub fn turns(&self) -> &[(Word, Feedback)] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Narrow `start` by every turn. Fails if no word survives.
    pub fn candidates(
        &self,
        filter: &mut CandidateFilter,
        start: &CandidateSet,
    ) -> Result<CandidateSet> {
        let mut candidates = start.clone();
        for &(guess, feedback) in &self.turns {
            candidates = filter.filter(&candidates, guess, feedback);
        }
        if candidates.is_empty() {
            return Err(InputError::NoCandidates.into());
        }
        Ok(candidates)
    }
}

/// Reject feedback that no solution could produce for `guess` because of the
/// order of its present and absent marks.
pub(crate) fn check_order(dictionary: &Dictionary, guess: Word, feedback: Feedback) -> Result<()> {
    if feedback.is_leftmost_consistent(dictionary.letters(guess)) {
        return Ok(());
    }
    Err(InputError::MisorderedFeedback {
        guess: dictionary.string(guess).to_string(),
        feedback: feedback.to_string(),
    }
    .into())
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
