//! Error types.
//!
//! Input errors are the caller's fault and are reported at the boundary.
//! Invariant violations mean the classifier, filter or search itself is broken
//! and abort the current operation. Running out of search depth is not an
//! error at all; it travels as [`crate::search::INFINITE_SCORE`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl Error {
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::Invariant(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("word `{0}` is not in the dictionary")]
    UnknownWord(String),
    #[error("word `{word}` must be {expected} lowercase ascii letters")]
    MalformedWord { word: String, expected: usize },
    #[error("word `{0}` appears more than once in the dictionary")]
    DuplicateWord(String),
    #[error("feedback `{0}` must be {1} characters from r/y/g")]
    MalformedFeedback(String, usize),
    #[error("feedback `{feedback}` for `{guess}` marks a letter absent before it is present")]
    MisorderedFeedback { guess: String, feedback: String },
    #[error("guesses and feedback must come in pairs, got {0} values")]
    UnpairedHistory(usize),
    #[error("no dictionary word is consistent with the given feedback")]
    NoCandidates,
    #[error("could not load word list `{path}`: {message}")]
    WordList { path: String, message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("search reached an empty candidate set")]
    EmptyCandidates,
    #[error("game for `{expected}` converged on `{found}`")]
    WrongSolution { expected: String, found: String },
    #[error("no score has been computed for this candidate set")]
    ScoreNotComputed,
}
