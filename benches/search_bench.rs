use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_search::dictionary::letters;
use wordle_search::filter::CandidateFilter;
use wordle_search::{Clue, Dictionary, Feedback, Session};

const WORDS: &[&str] = &[
    "batch", "beast", "blimp", "catch", "chomp", "crane", "crate", "hatch", "latch", "match",
    "patch", "raise", "roast", "slate", "stare", "toast", "trace", "watch", "wight", "arise",
];

fn dictionary() -> Arc<Dictionary> {
    Arc::new(Dictionary::new(WORDS.iter().copied()).unwrap())
}

fn bench_classify(c: &mut Criterion) {
    let solution = letters("ababa").unwrap();
    let guess = letters("aabbb").unwrap();
    c.bench_function("classify", |b| {
        b.iter(|| Feedback::classify(black_box(&solution), black_box(&guess)))
    });
}

fn bench_index_matching(c: &mut Criterion) {
    let dictionary = dictionary();
    let guess = letters("crane").unwrap();
    let clue = Clue::new(&guess, Feedback::parse("rrgrg").unwrap());
    c.bench_function("index_matching", |b| {
        b.iter(|| {
            dictionary
                .constraint_index()
                .matching(black_box(&guess), black_box(&clue))
        })
    });
}

fn bench_narrow_cached(c: &mut Criterion) {
    let dictionary = dictionary();
    let mut filter = CandidateFilter::new(Arc::clone(&dictionary));
    let all = dictionary.all();
    let solution = dictionary.word("watch").unwrap();
    let guess = dictionary.word("chomp").unwrap();
    c.bench_function("narrow_cached", |b| {
        b.iter(|| filter.narrow(black_box(&all), solution, guess))
    });
}

fn bench_best_guess(c: &mut Criterion) {
    let dictionary = dictionary();
    c.bench_function("best_guess_cold", |b| {
        b.iter(|| {
            let mut session = Session::new(Arc::clone(&dictionary));
            session.best_guess(black_box(&dictionary.all())).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_index_matching,
    bench_narrow_cached,
    bench_best_guess
);
criterion_main!(benches);
