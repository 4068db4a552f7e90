//! Puzzle assembly
//!
//! Picks a random seed word, scrambles it and collects its sub-words into a
//! `Puzzle`. Requests are validated up front so a failure never leaves a
//! partial puzzle behind.

use super::EngineError;
use super::scramble::scramble_with;
use super::subwords::{DEFAULT_MIN_LENGTH, SubWordGenerator};
use crate::core::{Puzzle, Word};
use crate::dictionary::DictionaryIndex;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Shortest puzzle word accepted
pub const MIN_PUZZLE_LENGTH: usize = 3;

/// Pick a uniformly random dictionary word, optionally of a given length
///
/// Returns `None` when no word matches.
pub fn random_word<'a, R: Rng + ?Sized>(
    index: &'a DictionaryIndex,
    length: Option<usize>,
    rng: &mut R,
) -> Option<&'a str> {
    match length {
        None => index.all_words().choose(rng).map(String::as_str),
        Some(length) => index.words_of_length(length).choose(rng).copied(),
    }
}

/// Check a puzzle request, returning the effective minimum sub-word length
///
/// # Errors
///
/// Returns the matching `EngineError` when `min_length` is zero, `length` is
/// below 3, `min_length` exceeds `length`, or `length` exceeds the seed cap.
pub fn validate_request(
    length: usize,
    min_length: Option<usize>,
    max_seed_length: usize,
) -> Result<usize, EngineError> {
    let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);

    if min_length == 0 {
        return Err(EngineError::InvalidMinLength(min_length));
    }
    if length < MIN_PUZZLE_LENGTH {
        return Err(EngineError::InvalidLength(length));
    }
    if min_length > length {
        return Err(EngineError::MinLengthExceedsLength { min_length, length });
    }
    if length > max_seed_length {
        return Err(EngineError::SeedTooLong {
            length,
            max: max_seed_length,
        });
    }

    Ok(min_length)
}

/// Builds puzzles from a dictionary
#[derive(Debug, Clone, Copy)]
pub struct PuzzleAssembler<'a> {
    index: &'a DictionaryIndex,
    generator: SubWordGenerator<'a>,
}

impl<'a> PuzzleAssembler<'a> {
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex, max_seed_length: usize) -> Self {
        Self {
            index,
            generator: SubWordGenerator::with_max_seed_length(index, max_seed_length),
        }
    }

    /// Assemble a puzzle from a random word of `length` letters
    ///
    /// # Errors
    ///
    /// See [`validate_request`]; additionally `EngineError::NoWordOfLength`
    /// when the dictionary has no usable word of that length.
    pub fn create_puzzle(
        &self,
        length: usize,
        min_length: Option<usize>,
    ) -> Result<Puzzle, EngineError> {
        self.create_puzzle_with(length, min_length, &mut rand::rng())
    }

    /// Same as [`Self::create_puzzle`] with a caller-supplied generator
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
        let min_length =
            validate_request(length, min_length, self.generator.max_seed_length())?;

        // Entries that are not plain letters cannot seed a puzzle
        let candidates: Vec<Word> = self
            .index
            .words_of_length(length)
            .into_iter()
            .filter_map(|word| Word::new(word).ok())
            .collect();

        let original = candidates
            .choose(rng)
            .cloned()
            .ok_or(EngineError::NoWordOfLength(length))?;

        let scrambled = Word::from_letters(scramble_with(original.text(), rng));
        let answers = self.generator.generate(original.text(), Some(min_length))?;

        Ok(Puzzle::new(original, scrambled, answers))
    }
}
