//! Core domain types for word puzzles
//!
//! This module contains the fundamental value types shared by every layer:
//! validated words and the assembled puzzle record.

mod puzzle;
mod word;

pub use puzzle::{GuessOutcome, Puzzle};
pub use word::{Word, WordError};
