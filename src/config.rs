//! Puzzle configuration
//!
//! Settings shared by the command-line layer and the interactive game.

use crate::engine::{
    DEFAULT_MAX_SEED_LENGTH, DEFAULT_MIN_LENGTH, EngineError, validate_request,
};

/// Default puzzle word length
pub const DEFAULT_LENGTH: usize = 6;

/// Puzzle request settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Letters in the seed word
    pub length: usize,
    /// Shortest sub-word accepted as an answer
    pub min_length: usize,
    /// Longest seed word sub-word generation will search
    pub max_seed_length: usize,
}

impl PuzzleConfig {
    #[must_use]
    pub const fn new(length: usize, min_length: usize) -> Self {
        Self {
            length,
            min_length,
            max_seed_length: DEFAULT_MAX_SEED_LENGTH,
        }
    }

    /// Override the seed length cap
    #[must_use]
    pub const fn with_max_seed_length(mut self, max_seed_length: usize) -> Self {
        self.max_seed_length = max_seed_length;
        self
    }

    /// Check the settings describe a puzzle that can be requested
    ///
    /// # Errors
    ///
    /// Returns the `EngineError` the engine would report for this request.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_request(self.length, Some(self.min_length), self.max_seed_length).map(|_| ())
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_MIN_LENGTH)
    }
}
