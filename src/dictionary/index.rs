//! Read-only dictionary lookup structures
//!
//! Built once from the word sequence supplied by a dictionary source and never
//! mutated afterwards, so a shared `&DictionaryIndex` is safe across threads.

use rustc_hash::{FxHashMap, FxHashSet};

/// Characters that can never start or end a search key
pub const INVALID_SEARCH_CHARS: &str = ",./<>?;':\"[]{}\\|1234567890!@#$%^&*()`~";

/// Immutable index over a dictionary
///
/// Keeps the words in source order (duplicates included) for deterministic
/// scans and uniform sampling, plus a membership set, length buckets and a
/// sorted copy for prefix queries.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    ordered: Vec<String>,
    membership: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<usize>>,
    sorted: Vec<String>,
    invalid_search_chars: FxHashSet<char>,
}

impl DictionaryIndex {
    /// Build the index from words in dictionary order
    ///
    /// Each entry is trimmed of surrounding whitespace; casing is kept as
    /// supplied.
    ///
    /// # Examples
    /// ```
    /// use word_jumble::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::from_words(["low", "owl", "yellow"]);
    /// assert!(index.contains("OWL"));
    /// assert_eq!(index.words_of_length(3), vec!["low", "owl"]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ordered: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .collect();

        let membership: FxHashSet<String> = ordered.iter().cloned().collect();

        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (position, word) in ordered.iter().enumerate() {
            by_length
                .entry(word.chars().count())
                .or_default()
                .push(position);
        }

        let mut sorted: Vec<String> = membership.iter().cloned().collect();
        sorted.sort_unstable();

        Self {
            ordered,
            membership,
            by_length,
            sorted,
            invalid_search_chars: INVALID_SEARCH_CHARS.chars().collect(),
        }
    }

    /// Case-insensitive, whitespace-trimmed membership test
    ///
    /// Empty input is never a member.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.membership.contains(&word.to_lowercase())
    }

    /// Exact membership test on already-normalized text
    #[inline]
    #[must_use]
    pub fn is_word(&self, candidate: &str) -> bool {
        self.membership.contains(candidate)
    }

    /// True when some dictionary word starts with `prefix` (exact casing)
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let position = self.sorted.partition_point(|word| word.as_str() < prefix);
        self.sorted
            .get(position)
            .is_some_and(|word| word.starts_with(prefix))
    }

    /// All words of exactly `length` characters, in dictionary order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        self.by_length.get(&length).map_or_else(Vec::new, |positions| {
            positions
                .iter()
                .map(|&position| self.ordered[position].as_str())
                .collect()
        })
    }

    /// The full word list in dictionary order
    #[must_use]
    pub fn all_words(&self) -> &[String] {
        &self.ordered
    }

    /// False if `c` is punctuation or a digit from the invalid set
    #[must_use]
    pub fn is_valid_search_char(&self, c: char) -> bool {
        !self.invalid_search_chars.contains(&c)
    }

    /// Number of entries in source order, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True when the dictionary has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
