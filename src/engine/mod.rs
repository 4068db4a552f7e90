//! Word jumble engine
//!
//! Scrambling, attribute search, sub-word generation and puzzle assembly over
//! a shared, immutable `DictionaryIndex`. Nothing here performs I/O or logs.

pub mod assembler;
mod error;
pub mod scramble;
pub mod search;
pub mod subwords;

pub use assembler::{MIN_PUZZLE_LENGTH, PuzzleAssembler, random_word, validate_request};
pub use error::EngineError;
pub use subwords::{DEFAULT_MAX_SEED_LENGTH, DEFAULT_MIN_LENGTH, SubWordGenerator};

use crate::config::PuzzleConfig;
use crate::core::Puzzle;
use crate::dictionary::DictionaryIndex;
use rand::Rng;
use std::collections::BTreeSet;

/// Entry point bundling every engine operation over one dictionary
///
/// Borrows the index, so any number of engines can share one dictionary.
#[derive(Debug, Clone, Copy)]
pub struct JumbleEngine<'a> {
    index: &'a DictionaryIndex,
    max_seed_length: usize,
}

impl<'a> JumbleEngine<'a> {
    /// Create an engine with the default seed length cap
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self {
            index,
            max_seed_length: DEFAULT_MAX_SEED_LENGTH,
        }
    }

    /// Create an engine using the seed length cap from `config`
    #[must_use]
    pub const fn with_config(index: &'a DictionaryIndex, config: &PuzzleConfig) -> Self {
        Self {
            index,
            max_seed_length: config.max_seed_length,
        }
    }

    /// Override the seed length cap
    #[must_use]
    pub const fn with_max_seed_length(mut self, max_seed_length: usize) -> Self {
        self.max_seed_length = max_seed_length;
        self
    }

    /// The underlying dictionary
    #[must_use]
    pub const fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    /// Seed length cap applied to sub-word generation
    #[must_use]
    pub const fn max_seed_length(&self) -> usize {
        self.max_seed_length
    }

    /// Case-insensitive dictionary membership
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// A random dictionary word, optionally of a given length
    #[must_use]
    pub fn random_word(&self, length: Option<usize>) -> Option<&'a str> {
        random_word(self.index, length, &mut rand::rng())
    }

    /// Rearrange the letters of `word`, differing from it when possible
    #[must_use]
    pub fn scramble(&self, word: &str) -> String {
        scramble::scramble(word)
    }

    /// Every palindrome longer than one letter
    #[must_use]
    pub fn palindromes(&self) -> BTreeSet<&'a str> {
        search::palindromes(self.index)
    }

    /// Words starting with `prefix`
    #[must_use]
    pub fn words_matching_prefix(&self, prefix: &str) -> Vec<&'a str> {
        search::by_prefix(self.index, prefix)
    }

    /// Words matching a start letter, end letter and length
    #[must_use]
    pub fn search_words(
        &self,
        start: Option<char>,
        end: Option<char>,
        length: Option<usize>,
    ) -> Vec<&'a str> {
        search::by_search(self.index, start, end, length)
    }

    /// Dictionary sub-words of `word`
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SeedTooLong` when `word` exceeds the seed cap.
    pub fn generate_sub_words(
        &self,
        word: &str,
        min_length: Option<usize>,
    ) -> Result<BTreeSet<String>, EngineError> {
        SubWordGenerator::with_max_seed_length(self.index, self.max_seed_length)
            .generate(word, min_length)
    }

    /// Assemble a new puzzle
    ///
    /// # Errors
    ///
    /// Returns an `EngineError` for invalid lengths or when no dictionary word
    /// of `length` letters exists.
    ///
    /// # Examples
    /// ```
    /// use word_jumble::dictionary::DictionaryIndex;
    /// use word_jumble::engine::JumbleEngine;
    ///
    /// let index = DictionaryIndex::from_words(["yellow", "yell", "owl", "low"]);
    /// let engine = JumbleEngine::new(&index);
    ///
    /// let puzzle = engine.create_puzzle(6, None).unwrap();
    /// assert_eq!(puzzle.original().text(), "yellow");
    /// assert_eq!(puzzle.total(), 3);
    /// ```
    pub fn create_puzzle(
        &self,
        length: usize,
        min_length: Option<usize>,
    ) -> Result<Puzzle, EngineError> {
        self.create_puzzle_with(length, min_length, &mut rand::rng())
    }

    /// Assemble a new puzzle with a caller-supplied generator
    ///
    /// # Errors
    ///
    /// See [`Self::create_puzzle`].
    pub fn create_puzzle_with<R: Rng + ?Sized>(
        &self,
        length: usize,
        min_length: Option<usize>,
        rng: &mut R,
    ) -> Result<Puzzle, EngineError> {
        PuzzleAssembler::new(self.index, self.max_seed_length).create_puzzle_with(
            length,
            min_length,
            rng,
        )
    }
}
