//! Engine error type

use std::fmt;

/// Rejected input or an impossible puzzle request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Puzzle word length below the minimum of 3
    InvalidLength(usize),
    /// Minimum sub-word length must be positive
    InvalidMinLength(usize),
    /// Minimum sub-word length larger than the puzzle word
    MinLengthExceedsLength { min_length: usize, length: usize },
    /// Seed word longer than the configured generation cap
    SeedTooLong { length: usize, max: usize },
    /// No dictionary word has the requested length
    NoWordOfLength(usize),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(length) => {
                write!(f, "Invalid length={length}, expect greater than or equal to 3")
            }
            Self::InvalidMinLength(min_length) => {
                write!(f, "Invalid min length={min_length}, expect positive integer")
            }
            Self::MinLengthExceedsLength { min_length, length } => write!(
                f,
                "Min length={min_length} must not be greater than length={length}"
            ),
            Self::SeedTooLong { length, max } => write!(
                f,
                "Seed word has {length} letters, sub-word generation is capped at {max}"
            ),
            Self::NoWordOfLength(length) => {
                write!(f, "Cannot find a dictionary word of length {length}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
