use std::collections::HashMap;
use std::sync::Arc;

use wordle_search::dictionary::members;
use wordle_search::filter::CandidateFilter;
use wordle_search::game::{guess_distribution, simulate};
use wordle_search::{
    CandidateSet, Dictionary, Error, InvariantViolation, SearchConfig, Session, INFINITE_SCORE,
};

fn dictionary(words: &[&str]) -> Arc<Dictionary> {
    Arc::new(Dictionary::new(words.iter().copied()).unwrap())
}

fn get_test_words() -> Vec<&'static str> {
    vec![
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ]
}

fn atch_words() -> Vec<&'static str> {
    vec![
        "batch", "catch", "hatch", "latch", "match", "patch", "watch", "chomp", "blimp", "wight",
    ]
}

/// Exhaustive search without ranking or pruning.
fn reference_score(
    filter: &mut CandidateFilter,
    dictionary: &Dictionary,
    candidates: &CandidateSet,
    memo: &mut HashMap<CandidateSet, u32>,
) -> u32 {
    let n = candidates.count();
    if n == 1 {
        return 100;
    }
    if n == 2 {
        return 150;
    }
    if let Some(&score) = memo.get(candidates) {
        return score;
    }
    let mut best = u32::MAX;
    for guess in members(&dictionary.all()) {
        let mut total = 0u64;
        let mut useless = false;
        for solution in members(candidates) {
            let matching = filter.narrow(candidates, solution, guess);
            if matching.count() == n {
                useless = true;
                break;
            }
            total += if matching.count() == 1 && matching.contains(guess.index()) {
                100
            } else {
                100 + reference_score(filter, dictionary, &matching, memo) as u64
            };
        }
        if !useless {
            best = best.min((total / n as u64) as u32);
        }
    }
    memo.insert(candidates.clone(), best);
    best
}

#[test]
fn test_single_candidate_scores_one_guess() {
    let dictionary = dictionary(&get_test_words());
    let mut session = Session::new(Arc::clone(&dictionary));
    let only = dictionary.candidates_from_strings(&["roast"]).unwrap();
    let best = session.best_guess(&only).unwrap();
    assert_eq!(best.score, 100);
    assert_eq!(dictionary.string(best.guess), "roast");
    assert!(!best.exhausted);
}

#[test]
fn test_two_candidates_score_one_and_a_half() {
    let dictionary = dictionary(&get_test_words());
    let mut session = Session::new(Arc::clone(&dictionary));
    let pair = dictionary
        .candidates_from_strings(&["toast", "beast"])
        .unwrap();
    let best = session.best_guess(&pair).unwrap();
    assert_eq!(best.score, 150);
    assert!(pair.contains(best.guess.index()));
    assert_eq!(best.expected_guesses(), 1.5);
}

#[test]
fn test_empty_candidates_is_invariant_violation() {
    let dictionary = dictionary(&get_test_words());
    let mut session = Session::new(Arc::clone(&dictionary));
    let err = session.best_guess(&dictionary.empty()).unwrap_err();
    assert_eq!(err, Error::Invariant(InvariantViolation::EmptyCandidates));
    assert!(err.is_invariant_violation());
}

#[test]
fn test_perfect_split_score() {
    let dictionary = dictionary(&["crane", "slate", "toast"]);
    let mut session = Session::new(Arc::clone(&dictionary));
    let best = session.best_guess(&dictionary.all()).unwrap();
    assert_eq!(best.score, 166);
    assert_eq!(dictionary.string(best.guess), "crane");
}

#[test]
fn test_matches_exhaustive_reference() {
    for words in [get_test_words(), atch_words()] {
        let dictionary = dictionary(&words);
        let mut session = Session::new(Arc::clone(&dictionary));
        let mut filter = CandidateFilter::new(Arc::clone(&dictionary));
        let mut memo = HashMap::new();

        let all = dictionary.all();
        let expected = reference_score(&mut filter, &dictionary, &all, &mut memo);
        let best = session.best_guess(&all).unwrap();
        assert_eq!(best.score, expected, "{:?}", words);

        let atch = dictionary.candidates_from_strings(&words[..7]).unwrap();
        let expected = reference_score(&mut filter, &dictionary, &atch, &mut memo);
        assert_eq!(session.best_guess(&atch).unwrap().score, expected, "{:?}", words);
    }
}

#[test]
fn test_best_guess_beats_lower_bound() {
    let dictionary = dictionary(&atch_words());
    let mut session = Session::new(Arc::clone(&dictionary));
    let candidates = dictionary
        .candidates_from_strings(&atch_words()[..7])
        .unwrap();
    let best = session.best_guess(&candidates).unwrap();
    let n = candidates.count() as u32;
    assert!(best.score >= (100 + 200 * (n - 1)) / n);
    assert!(best.score < INFINITE_SCORE);
}

#[test]
fn test_memoized_result_is_reused() {
    let dictionary = dictionary(&atch_words());
    let mut session = Session::new(Arc::clone(&dictionary));

    let first_set = dictionary
        .candidates_from_strings(&atch_words()[..7])
        .unwrap();
    let first = session.best_guess(&first_set).unwrap();
    let expansions = session.stats().expansions;
    assert!(expansions > 0);

    // same members, built independently
    let second_set = dictionary
        .candidates_from_strings(&[
            "watch", "patch", "match", "latch", "hatch", "catch", "batch",
        ])
        .unwrap();
    let second = session.best_guess(&second_set).unwrap();

    assert_eq!(first, second);
    assert_eq!(session.stats().expansions, expansions);
    assert!(session.stats().memo_hits > 0);
}

#[test]
fn test_cached_score() {
    let dictionary = dictionary(&atch_words());
    let mut session = Session::new(Arc::clone(&dictionary));
    let candidates = dictionary
        .candidates_from_strings(&atch_words()[..7])
        .unwrap();

    assert_eq!(
        session.cached_score(&candidates),
        Err(Error::Invariant(InvariantViolation::ScoreNotComputed))
    );
    let best = session.best_guess(&candidates).unwrap();
    assert_eq!(session.cached_score(&candidates), Ok(best));

    let single = dictionary.candidates_from_strings(&["chomp"]).unwrap();
    assert_eq!(session.cached_score(&single).unwrap().score, 100);
}

#[test]
fn test_depth_ceiling_gives_sentinel_score() {
    let dictionary = dictionary(&atch_words());
    let config = SearchConfig {
        max_depth: 0,
        ..SearchConfig::default()
    };
    let mut session = Session::with_config(Arc::clone(&dictionary), config);
    let candidates = dictionary
        .candidates_from_strings(&atch_words()[..7])
        .unwrap();

    let best = session.best_guess(&candidates).unwrap();
    assert!(best.exhausted);
    assert_eq!(best.score, INFINITE_SCORE);
    assert_eq!(dictionary.string(best.guess), "batch");
    assert!(session.stats().depth_exceeded > 0);
    assert_eq!(session.memo_len(), 0);
}

#[test]
fn test_two_word_game_ends_within_two_guesses() {
    let dictionary = dictionary(&["aaaaa", "abbbb"]);
    let mut session = Session::new(Arc::clone(&dictionary));
    let best = session.best_guess(&dictionary.all()).unwrap();
    assert_eq!(best.score, 150);

    let solution = dictionary.word("abbbb").unwrap();
    let guesses = simulate(&mut session, solution, &[best.guess]).unwrap();
    assert!(guesses.len() <= 2);
    assert_eq!(guesses.last(), Some(&solution));
}

#[test]
fn test_simulate_every_solution() {
    let dictionary = dictionary(&atch_words());
    let mut session = Session::new(Arc::clone(&dictionary));
    let all = dictionary.all();
    for solution in members(&all) {
        let guesses = simulate(&mut session, solution, &[]).unwrap();
        assert_eq!(guesses.last(), Some(&solution));
        let mut distinct = guesses.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(
            distinct.len(),
            guesses.len(),
            "repeated guess for {}",
            dictionary.string(solution)
        );
    }
}

#[test]
fn test_simulate_with_opening() {
    let dictionary = dictionary(&atch_words());
    let mut session = Session::new(Arc::clone(&dictionary));
    let opening = dictionary.lookup_all(&["chomp", "blimp"]).unwrap();
    let solution = dictionary.word("watch").unwrap();
    let guesses = simulate(&mut session, solution, &opening).unwrap();
    assert_eq!(&guesses[..2], opening.as_slice());
    assert_eq!(guesses.last(), Some(&solution));
}

#[test]
fn test_average_matches_search_score() {
    let dictionary = dictionary(&get_test_words());
    let mut session = Session::new(Arc::clone(&dictionary));
    let all = dictionary.all();
    let best = session.best_guess(&all).unwrap();

    let distribution = guess_distribution(&dictionary, SearchConfig::default(), &all, &[]).unwrap();
    let games: usize = distribution.iter().map(|(_, c)| c).sum();
    let guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
    assert_eq!(games, dictionary.len());
    // the search score truncates to whole hundredths at every level
    let average = guesses as f64 * 100.0 / games as f64;
    assert!(average >= best.score as f64);
    assert!(average - (best.score as f64) < 10.0);
}
