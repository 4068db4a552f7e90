//! Puzzle word representation
//!
//! A Word is a non-empty, trimmed, lowercase run of ASCII letters.

use rustc_hash::FxHashMap;
use std::fmt;

/// A validated lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_jumble::core::Word;
    ///
    /// let word = Word::new("  Yellow ").unwrap();
    /// assert_eq!(word.text(), "yellow");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("l33t").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Wrap text already known to be a rearrangement of a valid word
    pub(crate) fn from_letters(text: String) -> Self {
        debug_assert!(text.bytes().all(|c| c.is_ascii_lowercase()));
        Self { text }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word, provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of each letter in the word
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for ch in self.text.bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// True when `other` uses exactly the same letters, in any order
    #[must_use]
    pub fn is_anagram_of(&self, other: &Self) -> bool {
        self.len() == other.len() && self.letter_counts() == other.letter_counts()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("yellow").unwrap();
        assert_eq!(word.text(), "yellow");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("YELLOW").unwrap().text(), "yellow");
        assert_eq!(Word::new("\tYeLLow \n").unwrap().text(), "yellow");
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("don't"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn single_letter_is_a_word() {
        let word = Word::new("a").unwrap();
        assert_eq!(word.len(), 1);
    }

    #[test]
    fn letter_counts_with_duplicates() {
        let word = Word::new("yellow").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'l'), Some(&2));
        assert_eq!(counts.get(&b'y'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn anagram_check() {
        let word = Word::new("yellow").unwrap();
        assert!(word.is_anagram_of(&Word::new("lowely").unwrap()));
        assert!(!word.is_anagram_of(&Word::new("yelow").unwrap()));
        assert!(!word.is_anagram_of(&Word::new("yelloo").unwrap()));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Yowl").unwrap();
        assert_eq!(format!("{word}"), "yowl");
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("owl").unwrap(),
            Word::new("low").unwrap(),
            Word::new("lowly").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["low", "lowly", "owl"]);
    }
}
