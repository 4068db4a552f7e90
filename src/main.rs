//! Word Jumble - CLI
//!
//! Word puzzle game with TUI and CLI modes, plus dictionary lookup tools.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::io;
use word_jumble::{
    commands::{
        check_word, find_by_prefix, find_by_search, find_palindromes, list_sub_words, new_puzzle,
        pick_random, run_benchmark, run_simple, scramble_word,
    },
    config::{DEFAULT_LENGTH, PuzzleConfig},
    dictionary::DictionaryIndex,
    engine::{DEFAULT_MAX_SEED_LENGTH, DEFAULT_MIN_LENGTH, JumbleEngine},
    output::{
        print_benchmark_result, print_exists_result, print_puzzle, print_random_word,
        print_scramble_result, print_sub_words, print_word_list,
    },
    wordlists::{DICTIONARY, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_jumble",
    about = "Word jumble puzzles: scramble words, search the dictionary, find every hidden sub-word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Longest seed word sub-word generation will accept
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_SEED_LENGTH)]
    max_seed_length: usize,
}

#[derive(Args, Clone, Copy)]
struct PuzzleArgs {
    /// Letters in the seed word
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Shortest sub-word counted as an answer
    #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,
}

impl PuzzleArgs {
    const fn to_config(self, max_seed_length: usize) -> PuzzleConfig {
        PuzzleConfig::new(self.length, self.min_length).with_max_seed_length(max_seed_length)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },

    /// Simple CLI game (line-based, no TUI)
    Simple {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },

    /// Scramble a word
    Scramble {
        /// Word to scramble
        word: String,
    },

    /// Check whether a word is in the dictionary
    Exists {
        /// Word to look up
        word: String,
    },

    /// Pick a random dictionary word
    Random {
        /// Only pick words with this many letters
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List every palindrome in the dictionary
    Palindromes,

    /// List words starting with a prefix
    Prefix {
        /// Prefix to match
        prefix: String,
    },

    /// Search by first letter, last letter and length
    Search {
        /// First letter
        #[arg(short, long)]
        start: Option<char>,

        /// Last letter
        #[arg(short, long)]
        end: Option<char>,

        /// Word length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List every word spelled from a seed word's letters
    Subwords {
        /// Seed word
        word: String,

        /// Shortest sub-word to list
        #[arg(short, long)]
        min_length: Option<usize>,
    },

    /// Create a puzzle and print it
    Puzzle {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Show every answer and the original word
        #[arg(short, long)]
        reveal: bool,
    },

    /// Benchmark puzzle creation
    Benchmark {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Number of puzzles to build
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str) -> Result<DictionaryIndex> {
    let index = match source {
        "embedded" => DictionaryIndex::from_words(DICTIONARY),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load dictionary from '{path}'"))?;
            DictionaryIndex::from_words(words)
        }
    };

    info!("Loaded {} dictionary words from {source}", index.len());
    Ok(index)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let index = load_dictionary(&cli.dictionary)?;
    let engine = JumbleEngine::new(&index).with_max_seed_length(cli.max_seed_length);
    let max_seed_length = cli.max_seed_length;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        puzzle: PuzzleArgs {
            length: DEFAULT_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
        },
    });

    match command {
        Commands::Play { puzzle } => run_play_command(engine, puzzle.to_config(max_seed_length)),
        Commands::Simple { puzzle } => {
            let config = puzzle.to_config(max_seed_length);
            run_simple(&engine, &config, io::stdin().lock(), io::stdout())
        }
        Commands::Scramble { word } => {
            print_scramble_result(&scramble_word(&engine, &word));
            Ok(())
        }
        Commands::Exists { word } => {
            print_exists_result(&check_word(&engine, &word));
            Ok(())
        }
        Commands::Random { length } => {
            print_random_word(pick_random(&engine, length).as_deref(), length);
            Ok(())
        }
        Commands::Palindromes => {
            print_word_list(&find_palindromes(&engine));
            Ok(())
        }
        Commands::Prefix { prefix } => {
            print_word_list(&find_by_prefix(&engine, &prefix));
            Ok(())
        }
        Commands::Search { start, end, length } => {
            print_word_list(&find_by_search(&engine, start, end, length));
            Ok(())
        }
        Commands::Subwords { word, min_length } => {
            let result = list_sub_words(&engine, &word, min_length)?;
            print_sub_words(&result);
            Ok(())
        }
        Commands::Puzzle { puzzle, reveal } => {
            let puzzle = new_puzzle(&engine, &puzzle.to_config(max_seed_length))?;
            print_puzzle(&puzzle, reveal);
            Ok(())
        }
        Commands::Benchmark { puzzle, count } => {
            let config = puzzle.to_config(max_seed_length);
            println!(
                "Building {count} puzzles of {} letters (answers of {}+ letters)...",
                config.length, config.min_length
            );
            let result = run_benchmark(&engine, &config, count, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(engine: JumbleEngine, config: PuzzleConfig) -> Result<()> {
    use word_jumble::interactive::{App, run_tui};

    let app = App::new(engine, config)?;
    run_tui(app)
}
