//! Sub-word generation
//!
//! Enumerates every ordered arrangement of every subset of a seed word's
//! letters and keeps the arrangements found in the dictionary.
//!
//! The search is a recursive descent over letter positions. Two cuts keep it
//! practical without changing the result:
//! - a partial arrangement that no dictionary word starts with is abandoned
//! - at each depth a letter value is placed at most once, so repeated letters
//!   in the seed do not explore identical subtrees
//!
//! The worst case is still factorial in the seed length, so seeds longer than
//! `max_seed_length` are rejected rather than searched.

use super::EngineError;
use crate::dictionary::DictionaryIndex;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Default minimum sub-word length
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Default cap on seed length
pub const DEFAULT_MAX_SEED_LENGTH: usize = 10;

/// Finds dictionary words buildable from a seed word's letters
#[derive(Debug, Clone, Copy)]
pub struct SubWordGenerator<'a> {
    index: &'a DictionaryIndex,
    max_seed_length: usize,
}

impl<'a> SubWordGenerator<'a> {
    /// Create a generator with the default seed length cap
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self::with_max_seed_length(index, DEFAULT_MAX_SEED_LENGTH)
    }

    /// Create a generator that rejects seeds longer than `max_seed_length`
    #[must_use]
    pub const fn with_max_seed_length(index: &'a DictionaryIndex, max_seed_length: usize) -> Self {
        Self {
            index,
            max_seed_length,
        }
    }

    /// Configured seed length cap
    #[must_use]
    pub const fn max_seed_length(&self) -> usize {
        self.max_seed_length
    }

    /// Every dictionary word of at least `min_length` letters (default 3)
    /// formed from a subset of `word`'s letters, excluding `word` itself
    ///
    /// The seed is trimmed and lowercased. A zero `min_length` yields an
    /// empty set for any seed, even one over the cap.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SeedTooLong` if the trimmed seed has more
    /// letters than the configured cap.
    ///
    /// # Examples
    /// ```
    /// use word_jumble::dictionary::DictionaryIndex;
    /// use word_jumble::engine::subwords::SubWordGenerator;
    ///
    /// let index = DictionaryIndex::from_words(["low", "owl", "yell", "yellow", "zoo"]);
    /// let generator = SubWordGenerator::new(&index);
    ///
    /// let found: Vec<String> = generator.generate("yellow", None).unwrap().into_iter().collect();
    /// assert_eq!(found, ["low", "owl", "yell"]);
    /// ```
    pub fn generate(
        &self,
        word: &str,
        min_length: Option<usize>,
    ) -> Result<BTreeSet<String>, EngineError> {
        let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        let seed = word.trim().to_lowercase();
        let letters: Vec<char> = seed.chars().collect();

        if min_length == 0 {
            return Ok(BTreeSet::new());
        }

        if letters.len() > self.max_seed_length {
            return Err(EngineError::SeedTooLong {
                length: letters.len(),
                max: self.max_seed_length,
            });
        }

        if min_length > letters.len() {
            return Ok(BTreeSet::new());
        }

        let walk = Walk {
            index: self.index,
            letters: &letters,
            seed: &seed,
            min_length,
        };

        // Fan out over distinct first letters
        let mut found = distinct_positions(&letters, &vec![false; letters.len()])
            .into_par_iter()
            .map(|first| {
                let mut used = vec![false; letters.len()];
                let mut current = String::new();
                let mut found = BTreeSet::new();
                walk.place(first, &mut used, &mut current, &mut found);
                found
            })
            .reduce(BTreeSet::new, |mut all, part| {
                all.extend(part);
                all
            });

        found.remove(&seed);
        Ok(found)
    }
}

struct Walk<'w> {
    index: &'w DictionaryIndex,
    letters: &'w [char],
    seed: &'w str,
    min_length: usize,
}

impl Walk<'_> {
    /// Append the letter at `position` and explore every continuation
    fn place(
        &self,
        position: usize,
        used: &mut [bool],
        current: &mut String,
        found: &mut BTreeSet<String>,
    ) {
        current.push(self.letters[position]);

        if self.index.has_prefix(current) {
            used[position] = true;
            let depth = used.iter().filter(|&&u| u).count();

            if depth >= self.min_length
                && current.as_str() != self.seed
                && self.index.is_word(current)
            {
                found.insert(current.clone());
            }

            for next in distinct_positions(self.letters, used) {
                self.place(next, used, current, found);
            }

            used[position] = false;
        }

        current.pop();
    }
}

/// Unused positions, keeping only the first occurrence of each letter value
fn distinct_positions(letters: &[char], used: &[bool]) -> Vec<usize> {
    let mut seen: Vec<char> = Vec::with_capacity(letters.len());
    let mut positions = Vec::with_capacity(letters.len());

    for (position, &letter) in letters.iter().enumerate() {
        if !used[position] && !seen.contains(&letter) {
            seen.push(letter);
            positions.push(position);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;

    const YELLOW_ANSWERS: [&str; 13] = [
        "low", "lowly", "lye", "ole", "owe", "owl", "well", "welly", "woe", "yell", "yeow", "yew",
        "yowl",
    ];

    fn yellow_index() -> DictionaryIndex {
        let mut words: Vec<&str> = YELLOW_ANSWERS.to_vec();
        words.extend(["yellow", "lo", "we", "zebra", "yellows", "bellow", "owls"]);
        DictionaryIndex::from_words(words)
    }

    #[test]
    fn yellow_sub_words() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        let found = generator.generate("yellow", Some(3)).unwrap();

        let expected: BTreeSet<String> = YELLOW_ANSWERS.iter().map(|&w| w.to_string()).collect();
        assert_eq!(found, expected);
        assert!(!found.contains("yellow"));
    }

    #[test]
    fn default_min_length_is_three() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        assert_eq!(
            generator.generate("yellow", None).unwrap(),
            generator.generate("yellow", Some(3)).unwrap()
        );
    }

    #[test]
    fn lower_min_length_includes_short_words() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        let found = generator.generate("yellow", Some(2)).unwrap();
        assert!(found.contains("lo"));
        assert!(found.contains("we"));
        assert_eq!(found.len(), YELLOW_ANSWERS.len() + 2);
    }

    #[test]
    fn higher_min_length_filters() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        let found: Vec<String> = generator
            .generate("yellow", Some(5))
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(found, ["lowly", "welly"]);
    }

    #[test]
    fn seed_is_normalized() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        let found = generator.generate("  YELLOW ", Some(3)).unwrap();
        assert_eq!(found.len(), YELLOW_ANSWERS.len());
        assert!(!found.contains("yellow"));
    }

    #[test]
    fn generation_is_idempotent() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        assert_eq!(
            generator.generate("yellow", Some(3)).unwrap(),
            generator.generate("yellow", Some(3)).unwrap()
        );
    }

    #[test]
    fn min_length_above_word_length_is_empty() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        assert!(generator.generate("yellow", Some(7)).unwrap().is_empty());
    }

    #[test]
    fn zero_min_length_is_empty() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        assert!(generator.generate("yellow", Some(0)).unwrap().is_empty());
    }

    #[test]
    fn empty_seed_is_empty() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        assert!(generator.generate("", None).unwrap().is_empty());
        assert!(generator.generate("   ", Some(1)).unwrap().is_empty());
    }

    #[test]
    fn letters_are_not_reused_beyond_their_count() {
        let index = DictionaryIndex::from_words(["too", "to", "tot", "otto"]);
        let generator = SubWordGenerator::new(&index);
        let found: Vec<String> = generator.generate("toe", Some(2)).unwrap().into_iter().collect();
        assert_eq!(found, ["to"]);
    }

    #[test]
    fn anagram_of_seed_is_kept() {
        let index = DictionaryIndex::from_words(["listen", "silent", "enlist", "tin", "lens"]);
        let generator = SubWordGenerator::new(&index);
        let found: Vec<String> = generator
            .generate("listen", Some(3))
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(found, ["enlist", "lens", "silent", "tin"]);
    }

    #[test]
    fn seed_over_cap_is_rejected() {
        let index = yellow_index();
        let generator = SubWordGenerator::with_max_seed_length(&index, 5);
        assert_eq!(
            generator.generate("yellow", Some(3)),
            Err(EngineError::SeedTooLong { length: 6, max: 5 })
        );
        assert!(generator.generate("yell", Some(3)).is_ok());
    }

    #[test]
    fn distinct_positions_skip_used_and_repeats() {
        let letters: Vec<char> = "yellow".chars().collect();
        assert_eq!(distinct_positions(&letters, &[false; 6]), [0, 1, 2, 4, 5]);
        assert_eq!(
            distinct_positions(&letters, &[false, false, true, false, false, false]),
            [0, 1, 3, 4, 5]
        );
    }

    #[test]
    fn zero_min_length_wins_over_seed_cap() {
        let index = yellow_index();
        let generator = SubWordGenerator::new(&index);
        assert_eq!(
            generator.generate("yellowyellowy", Some(0)),
            Ok(BTreeSet::new())
        );
        assert!(generator.generate("yellowyellowy", Some(3)).is_err());
    }

    /// Every arrangement of every subset of the seed's letters, each looked up
    /// on its own, at least one letter long
    fn exhaustive(index: &DictionaryIndex, seed: &str) -> BTreeSet<String> {
        fn extend(
            index: &DictionaryIndex,
            letters: &[char],
            used: &mut [bool],
            current: &mut String,
            found: &mut BTreeSet<String>,
        ) {
            for position in 0..letters.len() {
                if used[position] {
                    continue;
                }
                used[position] = true;
                current.push(letters[position]);
                if index.is_word(current) {
                    found.insert(current.clone());
                }
                extend(index, letters, used, current, found);
                current.pop();
                used[position] = false;
            }
        }

        let letters: Vec<char> = seed.chars().collect();
        let mut found = BTreeSet::new();
        extend(
            index,
            &letters,
            &mut vec![false; letters.len()],
            &mut String::new(),
            &mut found,
        );
        found.remove(seed);
        found
    }

    #[test]
    fn pruned_walk_matches_exhaustive_enumeration() {
        let index = DictionaryIndex::from_words(DICTIONARY);
        let generator = SubWordGenerator::new(&index);

        let seeds = DICTIONARY
            .iter()
            .copied()
            .filter(|word| word.len() <= 7)
            .chain(["aabbcc", "lolly", "eeeee", "ssttoo"]);

        for seed in seeds {
            let all = exhaustive(&index, seed);
            for min_length in 1..=3 {
                let expected: BTreeSet<String> = all
                    .iter()
                    .filter(|word| word.len() >= min_length)
                    .cloned()
                    .collect();
                assert_eq!(
                    generator.generate(seed, Some(min_length)).unwrap(),
                    expected,
                    "seed '{seed}', min length {min_length}"
                );
            }
        }
    }
}
