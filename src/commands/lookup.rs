//! Dictionary lookup commands
//!
//! Scramble, existence, random pick and the attribute searches, packaged as
//! printable results.

use crate::engine::JumbleEngine;
use log::debug;

/// Result of scrambling a word
pub struct ScrambleResult {
    pub original: String,
    pub scrambled: String,
}

/// Result of an existence check
pub struct ExistsResult {
    pub word: String,
    pub exists: bool,
}

/// A titled list of matching words
pub struct WordListResult {
    pub title: String,
    pub words: Vec<String>,
}

impl WordListResult {
    fn new<'a>(title: String, words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            title,
            words: words.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Scramble the letters of `word`
#[must_use]
pub fn scramble_word(engine: &JumbleEngine, word: &str) -> ScrambleResult {
    let scrambled = engine.scramble(word);
    if scrambled == word {
        debug!("'{word}' has no distinct arrangement, returned unchanged");
    }

    ScrambleResult {
        original: word.to_string(),
        scrambled,
    }
}

/// Check whether `word` is in the dictionary
#[must_use]
pub fn check_word(engine: &JumbleEngine, word: &str) -> ExistsResult {
    ExistsResult {
        word: word.trim().to_string(),
        exists: engine.exists(word),
    }
}

/// Pick a random word, optionally of a given length
#[must_use]
pub fn pick_random(engine: &JumbleEngine, length: Option<usize>) -> Option<String> {
    engine.random_word(length).map(str::to_string)
}

/// All palindromes in the dictionary
#[must_use]
pub fn find_palindromes(engine: &JumbleEngine) -> WordListResult {
    WordListResult::new("Palindromes".to_string(), engine.palindromes())
}

/// Words starting with `prefix`
#[must_use]
pub fn find_by_prefix(engine: &JumbleEngine, prefix: &str) -> WordListResult {
    WordListResult::new(
        format!("Words starting with '{}'", prefix.trim()),
        engine.words_matching_prefix(prefix),
    )
}

/// Words matching start letter, end letter and length
#[must_use]
pub fn find_by_search(
    engine: &JumbleEngine,
    start: Option<char>,
    end: Option<char>,
    length: Option<usize>,
) -> WordListResult {
    let mut criteria = Vec::new();
    if let Some(c) = start {
        criteria.push(format!("start='{c}'"));
    }
    if let Some(c) = end {
        criteria.push(format!("end='{c}'"));
    }
    if let Some(n) = length {
        criteria.push(format!("length={n}"));
    }
    let title = if criteria.is_empty() {
        "Search (no criteria)".to_string()
    } else {
        format!("Search {}", criteria.join(", "))
    };

    WordListResult::new(title, engine.search_words(start, end, length))
}
