//! Playing out games against a known solution.

use std::sync::Arc;

use log::trace;
use rayon::prelude::*;

use crate::bitset::CandidateSet;
use crate::dictionary::{members, Dictionary, Word};
use crate::error::{InvariantViolation, Result};
use crate::search::{SearchConfig, Session};

/// Play one game for `solution`, opening with `initial_guesses` and letting
/// the search pick every later guess. Returns all guesses made, ending with
/// the solution.
pub fn simulate(
    session: &mut Session,
    solution: Word,
    initial_guesses: &[Word],
) -> Result<Vec<Word>> {
    let dictionary = Arc::clone(session.dictionary());
    let mut candidates = dictionary.all();
    let mut guesses = Vec::new();

    loop {
        let guess = match initial_guesses.get(guesses.len()) {
            Some(&guess) => guess,
            None => session.best_guess(&candidates)?.guess,
        };
        guesses.push(guess);
        candidates = session
            .filter_mut()
            .narrow(&candidates, solution, guess);
        trace!(
            "{}: guessed {}, {} candidates left",
            dictionary.string(solution),
            dictionary.string(guess),
            candidates.count()
        );

        match candidates.count() {
            0 => return Err(InvariantViolation::EmptyCandidates.into()),
            1 => {
                let last = candidates
                    .first()
                    .map(Word::from)
                    .ok_or(InvariantViolation::EmptyCandidates)?;
                if last != solution {
                    return Err(InvariantViolation::WrongSolution {
                        expected: dictionary.string(solution).to_string(),
                        found: dictionary.string(last).to_string(),
                    }
                    .into());
                }
                if last != guess {
                    guesses.push(last);
                }
                return Ok(guesses);
            }
            _ => {}
        }
    }
}

/// Play every solution in `solutions` with the same opening, in parallel.
/// Each worker thread owns its own [`Session`]. Returns `(solution, guesses)`
/// in solution index order.
pub fn simulate_all(
    dictionary: &Arc<Dictionary>,
    config: SearchConfig,
    solutions: &CandidateSet,
    initial_guesses: &[Word],
) -> Result<Vec<(Word, Vec<Word>)>> {
    let solutions: Vec<Word> = members(solutions).collect();
    solutions
        .par_iter()
        .map_init(
            || Session::with_config(Arc::clone(dictionary), config),
            |session, &solution| {
                simulate(session, solution, initial_guesses).map(|guesses| (solution, guesses))
            },
        )
        .collect()
}

/// Histogram of game lengths over `solutions`: `(guesses, games)` pairs in
/// ascending order of guesses.
pub fn guess_distribution(
    dictionary: &Arc<Dictionary>,
    config: SearchConfig,
    solutions: &CandidateSet,
    initial_guesses: &[Word],
) -> Result<Vec<(usize, usize)>> {
    let games = simulate_all(dictionary, config, solutions, initial_guesses)?;
    Ok(histogram(games.iter().map(|(_, guesses)| guesses.len())))
}

pub fn histogram(lengths: impl Iterator<Item = usize>) -> Vec<(usize, usize)> {
    let mut distribution: Vec<usize> = Vec::new();
    for len in lengths {
        if distribution.len() <= len {
            distribution.resize(len + 1, 0);
        }
        distribution[len] += 1;
    }
    distribution
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count > 0)
        .collect()
}
