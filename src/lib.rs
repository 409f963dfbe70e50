//! # Wordle Search
//!
//! Optimal guess selection for Wordle-style games.
//!
//! Candidate solutions are bit sets over dictionary indices. Feedback is turned
//! into a handful of intersections against a precomputed per-letter index, and
//! a branch-and-bound search over those sets finds the guess minimizing the
//! expected number of guesses, memoizing every candidate set it solves.

pub mod bitset;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod game;
pub mod history;
pub mod index;
pub mod ranker;
pub mod search;
pub mod solver;

pub use bitset::{BitSet, CandidateSet};
pub use dictionary::{load_word_list, Dictionary, Word};
pub use error::{Error, InputError, InvariantViolation, Result};
pub use feedback::{Clue, Color, Feedback};
pub use history::History;
pub use search::{BestGuess, SearchConfig, Session, GUESS_COST, INFINITE_SCORE};
pub use solver::WordleSolver;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Letters `a` through `z`.
pub const ALPHABET_SIZE: usize = 26;
