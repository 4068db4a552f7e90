//! Attribute search over the dictionary
//!
//! All queries are case-insensitive and return words as stored in the
//! dictionary.

use crate::dictionary::DictionaryIndex;
use std::collections::BTreeSet;

/// Every word longer than one character that reads the same reversed
///
/// # Examples
/// ```
/// use word_jumble::dictionary::DictionaryIndex;
/// use word_jumble::engine::search::palindromes;
///
/// let index = DictionaryIndex::from_words(["eye", "a", "yellow", "Level"]);
/// let found: Vec<&str> = palindromes(&index).into_iter().collect();
/// assert_eq!(found, ["Level", "eye"]);
/// ```
#[must_use]
pub fn palindromes(index: &DictionaryIndex) -> BTreeSet<&str> {
    index
        .all_words()
        .iter()
        .map(String::as_str)
        .filter(|word| is_palindrome(word))
        .collect()
}

fn is_palindrome(word: &str) -> bool {
    let letters: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    letters.len() > 1 && letters.iter().eq(letters.iter().rev())
}

/// Words starting with `prefix`, in dictionary order
///
/// A blank prefix, or one whose first character is an invalid search
/// character, matches nothing.
#[must_use]
pub fn by_prefix<'a>(index: &'a DictionaryIndex, prefix: &str) -> Vec<&'a str> {
    let prefix = prefix.trim();
    let Some(first) = prefix.chars().next() else {
        return Vec::new();
    };
    if !index.is_valid_search_char(first) {
        return Vec::new();
    }

    let prefix = prefix.to_lowercase();
    index
        .all_words()
        .iter()
        .filter(|word| word.to_lowercase().starts_with(&prefix))
        .map(String::as_str)
        .collect()
}

/// Words matching every supplied criterion, in dictionary order
///
/// Absent criteria always hold. With all three absent the result is empty.
/// An invalid start or end character, or a zero length, matches nothing.
#[must_use]
pub fn by_search(
    index: &DictionaryIndex,
    start: Option<char>,
    end: Option<char>,
    length: Option<usize>,
) -> Vec<&str> {
    if start.is_none() && end.is_none() && length.is_none() {
        return Vec::new();
    }

    let criterion = |c: Option<char>| {
        c.map(|c| index.is_valid_search_char(c).then(|| c.to_ascii_lowercase()))
    };
    let start = criterion(start);
    let end = criterion(end);

    // Some(None) is a supplied-but-invalid character
    if matches!(start, Some(None)) || matches!(end, Some(None)) || length == Some(0) {
        return Vec::new();
    }

    index
        .all_words()
        .iter()
        .filter(|word| {
            let cleaned = word.to_lowercase();
            let matches_start = start.flatten().is_none_or(|c| cleaned.starts_with(c));
            let matches_end = end.flatten().is_none_or(|c| cleaned.ends_with(c));
            let matches_length = length.is_none_or(|n| cleaned.chars().count() == n);
            matches_start && matches_end && matches_length
        })
        .map(String::as_str)
        .collect()
}
