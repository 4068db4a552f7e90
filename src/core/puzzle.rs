//! Puzzle (game state) record
//!
//! A puzzle pairs a seed word with its scrambled letters and every sub-word
//! the player can find. Only the per-answer solved flags change after
//! assembly.

use super::Word;
use std::collections::BTreeMap;

/// Result of submitting a guess against a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess is an answer and was not found before
    Correct,
    /// The guess is an answer that was already found
    AlreadyFound,
    /// The guess is the seed word itself
    Unscrambled,
    /// The guess is not one of the answers
    NotAnAnswer,
}

/// Scrambled word plus the set of discoverable answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    original: Word,
    scrambled: Word,
    sub_words: BTreeMap<String, bool>,
}

impl Puzzle {
    /// Assemble a puzzle with every answer unsolved
    pub(crate) fn new(
        original: Word,
        scrambled: Word,
        answers: impl IntoIterator<Item = String>,
    ) -> Self {
        debug_assert!(original.is_anagram_of(&scrambled));
        let sub_words = answers.into_iter().map(|word| (word, false)).collect();

        Self {
            original,
            scrambled,
            sub_words,
        }
    }

    /// The seed word
    #[must_use]
    pub const fn original(&self) -> &Word {
        &self.original
    }

    /// The seed word's letters, rearranged
    #[must_use]
    pub const fn scrambled(&self) -> &Word {
        &self.scrambled
    }

    /// Every answer with its solved flag, in lexicographic order
    #[must_use]
    pub const fn sub_words(&self) -> &BTreeMap<String, bool> {
        &self.sub_words
    }

    /// Answers in lexicographic order
    pub fn answers(&self) -> impl Iterator<Item = &str> {
        self.sub_words.keys().map(String::as_str)
    }

    /// Submit a guess, marking the answer solved when it matches
    pub fn guess(&mut self, word: &str) -> GuessOutcome {
        let guess = word.trim().to_lowercase();

        if guess == self.original.text() {
            return GuessOutcome::Unscrambled;
        }

        match self.sub_words.get_mut(&guess) {
            Some(solved) if *solved => GuessOutcome::AlreadyFound,
            Some(solved) => {
                *solved = true;
                GuessOutcome::Correct
            }
            None => GuessOutcome::NotAnAnswer,
        }
    }

    /// Mark every answer solved
    pub fn reveal_all(&mut self) {
        for solved in self.sub_words.values_mut() {
            *solved = true;
        }
    }

    /// Number of answers found so far
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.sub_words.values().filter(|&&solved| solved).count()
    }

    /// Total number of answers
    #[must_use]
    pub fn total(&self) -> usize {
        self.sub_words.len()
    }

    /// True once every answer has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sub_words.values().all(|&solved| solved)
    }
}
