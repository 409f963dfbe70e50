//! Wordle Search CLI
//!
//! Command-line front end for the guess search: play from a guess/feedback
//! history, simulate games, or list opening guesses.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::info;
use wordle_search::ranker::Ranking;
use wordle_search::{
    game, load_word_list, Dictionary, Error, History, Result, SearchConfig, Session, Word,
    WordleSolver,
};

#[derive(Parser, Debug)]
#[command(name = "wordle-search", version, about = "Optimal guesses for Wordle-style games")]
struct Cli {
    /// Word list, one five-letter word per line
    #[arg(short, long, env = "WORDLE_WORDS")]
    words: PathBuf,

    /// Use only the first N words of the sorted list, 0 for all
    #[arg(short, long, default_value_t = 0)]
    count: usize,

    /// Recursion ceiling for the search
    #[arg(long, default_value_t = SearchConfig::default().max_depth)]
    max_depth: usize,

    /// Ranked guesses explored per candidate set
    #[arg(long, default_value_t = SearchConfig::default().max_ranked_guesses)]
    max_guesses: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Best next guess from pairs of `guess feedback`, feedback in r/y/g
    Play {
        #[arg(required = true, num_args = 2..)]
        history: Vec<String>,
    },
    /// Simulate games for the given solutions (all words if none)
    Sim {
        /// Opening guess; repeat for several
        #[arg(short, long)]
        first: Vec<String>,
        /// Play one game using every --first word in order as the opening
        #[arg(long, requires = "first")]
        one: bool,
        solutions: Vec<String>,
    },
    /// Rank opening guesses by total remaining candidates
    First {
        #[arg(short, long, default_value_t = 20)]
        top: usize,
    },
    /// Best opening guess for the whole dictionary
    Suggest,
}

fn load(cli: &Cli) -> Result<Arc<Dictionary>> {
    let mut words = load_word_list(&cli.words)?;
    if cli.count > 0 {
        words.truncate(cli.count);
    }
    Ok(Arc::new(Dictionary::new(words)?))
}

fn play(dictionary: Arc<Dictionary>, config: SearchConfig, args: &[String]) -> Result<()> {
    let history = History::from_args(&dictionary, args)?;
    let mut solver = WordleSolver::with_config(dictionary, config);
    solver.apply_history(&history)?;
    info!(
        "{} turns leave {} candidates",
        history.len(),
        solver.remaining_count()
    );
    match solver.find_best_guess()? {
        Some(analysis) => {
            print!("{}:", analysis.word);
            for word in solver.possible_answers() {
                print!(" {}", word);
            }
            println!();
            println!(
                "expected guesses: {:.2}{}",
                analysis.expected_guesses,
                if analysis.is_possible_answer { " (possible answer)" } else { "" }
            );
        }
        None => println!("No possible words remaining."),
    }
    Ok(())
}

fn simulate(
    dictionary: Arc<Dictionary>,
    config: SearchConfig,
    first: &[String],
    one: bool,
    solution_args: &[String],
) -> Result<()> {
    let solutions = if solution_args.is_empty() {
        dictionary.all()
    } else {
        dictionary.candidates_from_strings(solution_args)?
    };

    let openings: Vec<Vec<Word>> = if one {
        vec![dictionary.lookup_all(first)?]
    } else if first.is_empty() {
        (0..dictionary.len()).map(|i| vec![Word::from(i)]).collect()
    } else {
        dictionary
            .lookup_all(first)?
            .into_iter()
            .map(|w| vec![w])
            .collect()
    };

    for (round, opening) in openings.iter().enumerate() {
        println!(
            "opening {}/{}: {:?}",
            round + 1,
            openings.len(),
            dictionary.to_strings(opening)
        );
        let start = Instant::now();
        let games = game::simulate_all(&dictionary, config, &solutions, opening)?;
        for (solution, guesses) in &games {
            println!(
                "{}: {}",
                dictionary.string(*solution),
                dictionary.to_strings(guesses).join(" ")
            );
        }

        let distribution = game::histogram(games.iter().map(|(_, g)| g.len()));
        let total: usize = distribution.iter().map(|(_, c)| c).sum();
        let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
        println!("{}", "-".repeat(40));
        for (guesses, count) in &distribution {
            let bar = "█".repeat((*count * 40 / total.max(1)).max(1));
            println!("  {} guesses: {:>5} {}", guesses, count, bar);
        }
        println!(
            "Average guesses: {:.3} over {} games in {:.2?}",
            total_guesses as f64 / total.max(1) as f64,
            total,
            start.elapsed()
        );
    }
    Ok(())
}

fn list_openings(dictionary: Arc<Dictionary>, config: SearchConfig, top: usize) {
    let mut session = Session::with_config(Arc::clone(&dictionary), config);
    match session.rank(&dictionary.all()) {
        Ranking::Perfect { guess, score } => {
            println!("{} (perfect, score {})", dictionary.string(guess), score);
        }
        Ranking::Ordered(list) => {
            for ranked in list.iter().take(top) {
                println!("{} {}", dictionary.string(ranked.guess), ranked.score);
            }
        }
    }
}

fn suggest(dictionary: Arc<Dictionary>, config: SearchConfig) -> Result<()> {
    let mut session = Session::with_config(Arc::clone(&dictionary), config);
    let start = Instant::now();
    let best = session.best_guess(&dictionary.all())?;
    info!("search stats: {:?}", session.stats());
    println!("Best opening guess: {}", dictionary.string(best.guess));
    println!("Expected guesses: {:.2}", best.expected_guesses());
    println!("Time: {:.2?}", start.elapsed());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let dictionary = load(&cli)?;
    let config = SearchConfig {
        max_depth: cli.max_depth,
        max_ranked_guesses: cli.max_guesses,
        ..SearchConfig::default()
    };
    match &cli.command {
        Command::Play { history } => play(dictionary, config, history),
        Command::Sim {
            first,
            one,
            solutions,
        } => simulate(dictionary, config, first, *one, solutions),
        Command::First { top } => {
            list_openings(dictionary, config, *top);
            Ok(())
        }
        Command::Suggest => suggest(dictionary, config),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        let code = match e {
            Error::Input(_) => 2,
            Error::Invariant(_) => 1,
        };
        std::process::exit(code);
    }
}
