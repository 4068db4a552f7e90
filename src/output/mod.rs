//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_exists_result, print_puzzle, print_random_word,
    print_scramble_result, print_sub_words, print_word_list,
};
