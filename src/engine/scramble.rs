//! Letter scrambling
//!
//! Rejection sampling over uniform shuffles: draw until the arrangement
//! differs from the input. Inputs with no distinct arrangement (shorter than
//! two letters, or one repeated letter) are returned unchanged instead.

use rand::Rng;
use rand::seq::SliceRandom;

/// Scramble `word` using the thread-local generator
///
/// # Examples
/// ```
/// use word_jumble::engine::scramble::scramble;
///
/// let scrambled = scramble("elephant");
/// assert_ne!(scrambled, "elephant");
/// assert_eq!(scrambled.len(), 8);
///
/// assert_eq!(scramble("a"), "a");
/// assert_eq!(scramble("zzz"), "zzz");
/// ```
#[must_use]
pub fn scramble(word: &str) -> String {
    scramble_with(word, &mut rand::rng())
}

/// Scramble `word` with a caller-supplied generator
#[must_use]
pub fn scramble_with<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();

    if !can_scramble(&letters) {
        return word.to_string();
    }

    // At least two distinct letters, so each draw has a non-zero chance to differ
    loop {
        letters.shuffle(rng);
        let scrambled: String = letters.iter().collect();
        if scrambled != word {
            return scrambled;
        }
    }
}

/// True when some rearrangement of `letters` differs from it
fn can_scramble(letters: &[char]) -> bool {
    match letters.split_first() {
        Some((first, rest)) => rest.iter().any(|c| c != first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted_letters(word: &str) -> Vec<char> {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn scramble_differs_and_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        for word in ["elephant", "yellow", "ab", "abc", "aab", "level"] {
            for _ in 0..50 {
                let scrambled = scramble_with(word, &mut rng);
                assert_ne!(scrambled, word);
                assert_eq!(sorted_letters(&scrambled), sorted_letters(word));
            }
        }
    }

    #[test]
    fn two_letter_word_is_swapped() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble_with("ab", &mut rng), "ba");
    }

    #[test]
    fn short_input_returned_unchanged() {
        assert_eq!(scramble(""), "");
        assert_eq!(scramble("a"), "a");
    }

    #[test]
    fn repeated_single_letter_returned_unchanged() {
        assert_eq!(scramble("aa"), "aa");
        assert_eq!(scramble("zzzz"), "zzzz");
    }

    #[test]
    fn scramble_is_seed_reproducible() {
        let first = scramble_with("elephant", &mut StdRng::seed_from_u64(42));
        let second = scramble_with("elephant", &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn can_scramble_cases() {
        assert!(!can_scramble(&[]));
        assert!(!can_scramble(&['a']));
        assert!(!can_scramble(&['b', 'b', 'b']));
        assert!(can_scramble(&['b', 'a', 'b']));
    }
}
