//! Word Jumble
//!
//! A word puzzle engine: scramble dictionary words, search the dictionary and
//! generate every sub-word that can be spelled from a seed word's letters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_jumble::{dictionary::DictionaryIndex, engine::JumbleEngine, wordlists::DICTIONARY};
//!
//! let index = DictionaryIndex::from_words(DICTIONARY);
//! let engine = JumbleEngine::new(&index);
//!
//! let words = engine.generate_sub_words("yellow", Some(3)).unwrap();
//! println!("{} words hidden in YELLOW", words.len());
//!
//! let puzzle = engine.create_puzzle(6, Some(3)).unwrap();
//! println!("Unscramble {}", puzzle.scrambled());
//! ```

// Core domain types
pub mod core;

// Puzzle settings
pub mod config;

// Dictionary indexing
pub mod dictionary;

// Scrambling, search and sub-word generation
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
