//! Word list loading utilities
//!
//! Reads dictionaries from newline-separated files. Entries are
//! trimmed and blank lines skipped; everything else is kept in file order.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-separated file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_jumble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);

    debug!("Loaded {} words from {}", words.len(), path.display());
    let unusable = words
        .iter()
        .filter(|word| !word.chars().all(|c| c.is_ascii_lowercase()))
        .count();
    if unusable > 0 {
        warn!(
            "{unusable} entries in {} are not lowercase ASCII words and will not seed puzzles",
            path.display()
        );
    }

    Ok(words)
}

/// Split in-memory text into trimmed, non-blank entries
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
