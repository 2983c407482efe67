use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use boggle_solver::boggle::board::Board;
use boggle_solver::boggle::word_search::{self, MatchPolicy};
use boggle_solver::boggle::{dictionary, MAX_WORD_LENGTH};
use boggle_solver::utils::{logging, output};

/// Finds the dictionary words hidden in a 4x4 letter grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Newline delimited word list, one lowercase word per line
    #[arg(short, long, default_value = "words_alpha.txt")]
    dictionary: PathBuf,

    /// JSON board file (4 rows of 4 single letter strings). Defaults to the built in board
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Roll a random board instead
    #[arg(long, conflicts_with = "board")]
    random: bool,

    /// Seed for the random board
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Write the board that was used to this JSON file
    #[arg(long)]
    save_board: Option<PathBuf>,

    /// Report each word once instead of once per starting cell
    #[arg(short, long)]
    unique: bool,

    /// Longest word to look for
    #[arg(short, long, default_value_t = MAX_WORD_LENGTH)]
    max_length: usize,

    /// Print the cells used by every match to stderr
    #[arg(long)]
    show_paths: bool,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("BOGGLE_DEBUG").is_ok();
    logging::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let board = if let Some(path) = &cli.board {
        Board::from_file(path)?
    } else if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Board::random(&mut rng)
    } else {
        Board::example()
    };
    log::info!("board:\n{}", board);

    if let Some(path) = &cli.save_board {
        board.save(path)?;
    }

    if cli.max_length > MAX_WORD_LENGTH {
        log::warn!(
            "max length {} is longer than the board allows, using {}",
            cli.max_length,
            MAX_WORD_LENGTH
        );
    }
    let max_length = cli.max_length.min(MAX_WORD_LENGTH);

    let t_load = Instant::now();
    let letters = board.unique_letters();
    let candidates = dictionary::load_filtered(&cli.dictionary, &letters, max_length);
    let load_secs = t_load.elapsed().as_secs_f64();
    if candidates.is_empty() {
        log::warn!("no candidate words loaded from {}", cli.dictionary.display());
    }

    let policy = if cli.unique {
        MatchPolicy::Unique
    } else {
        MatchPolicy::EveryStart
    };

    let t_search = Instant::now();
    let words = if cli.show_paths {
        let matches = word_search::find_matches_with(&board, &candidates, policy);
        for m in &matches {
            let path = m.path.iter().map(|p| p.to_string()).collect::<Vec<_>>();
            eprintln!("{}: {}", m.word, path.join(" -> "));
        }
        matches.into_iter().map(|m| m.word).collect::<Vec<_>>()
    } else {
        word_search::find_words_with(&board, &candidates, policy)
    };
    let search_secs = t_search.elapsed().as_secs_f64();

    println!("{}", output::render_words(&words));

    log::info!(
        "{} candidates loaded in {:.3}s; {} words found in {:.3}s",
        candidates.len(),
        load_secs,
        words.len(),
        search_secs
    );

    Ok(())
}
