//! Sub-word listing command
//!
//! Generates every dictionary sub-word of a seed and groups them by length.

use crate::core::Word;
use crate::engine::{DEFAULT_MIN_LENGTH, JumbleEngine};
use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of generating sub-words
pub struct SubWordsResult {
    pub seed: String,
    pub min_length: usize,
    pub words: Vec<String>,
    pub by_length: BTreeMap<usize, Vec<String>>,
    pub duration: Duration,
}

/// Generate sub-words of `seed`
///
/// # Errors
///
/// Returns an error if:
/// - The seed is not a plain word (letters only)
/// - The seed is longer than the engine's seed cap
pub fn list_sub_words(
    engine: &JumbleEngine,
    seed: &str,
    min_length: Option<usize>,
) -> Result<SubWordsResult> {
    let seed = Word::new(seed).with_context(|| format!("Invalid seed word '{seed}'"))?;

    let start = Instant::now();
    let words: Vec<String> = engine
        .generate_sub_words(seed.text(), min_length)?
        .into_iter()
        .collect();
    let duration = start.elapsed();

    debug!(
        "Generated {} sub-words of '{seed}' in {:.2}ms",
        words.len(),
        duration.as_secs_f64() * 1000.0
    );

    let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in &words {
        by_length.entry(word.len()).or_default().push(word.clone());
    }

    Ok(SubWordsResult {
        seed: seed.text().to_string(),
        min_length: min_length.unwrap_or(DEFAULT_MIN_LENGTH),
        words,
        by_length,
        duration,
    })
}
