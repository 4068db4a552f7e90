//! Command implementations

pub mod benchmark;
pub mod lookup;
pub mod puzzle;
pub mod simple;
pub mod subwords;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use lookup::{
    ExistsResult, ScrambleResult, WordListResult, check_word, find_by_prefix, find_by_search,
    find_palindromes, pick_random, scramble_word,
};
pub use puzzle::new_puzzle;
pub use simple::run_simple;
pub use subwords::{SubWordsResult, list_sub_words};
