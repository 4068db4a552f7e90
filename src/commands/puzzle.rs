//! Puzzle creation command

use crate::config::PuzzleConfig;
use crate::core::Puzzle;
use crate::engine::JumbleEngine;
use anyhow::{Context, Result};
use log::info;

/// Assemble a puzzle from validated settings
///
/// # Errors
///
/// Returns an error if the settings are invalid or the dictionary has no
/// word of the requested length.
pub fn new_puzzle(engine: &JumbleEngine, config: &PuzzleConfig) -> Result<Puzzle> {
    config.validate().context("Invalid puzzle settings")?;

    let puzzle = engine
        .create_puzzle(config.length, Some(config.min_length))
        .with_context(|| format!("Cannot create a {}-letter puzzle", config.length))?;

    info!(
        "New puzzle: {} letters, {} answers (min length {})",
        puzzle.original().len(),
        puzzle.total(),
        config.min_length
    );

    Ok(puzzle)
}
