//! Word lists for Evil Hangman
//!
//! Provides the embedded default dictionary and loading of custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use loader::{Dictionary, LoadError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_alphabetic() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn dictionary_has_several_lengths() {
        let dictionary = Dictionary::builtin();
        for length in 2..=6 {
            assert!(
                !dictionary.with_length(length).is_empty(),
                "no {length}-letter words"
            );
        }
    }

    #[test]
    fn dictionary_contains_example_family() {
        let four = Dictionary::builtin().with_length(4);
        for word in ["CODE", "COLD", "CORE", "COVE"] {
            assert!(four.iter().any(|w| w.text() == word), "missing {word}");
        }
    }
}
