//! Text Normalizer: turns raw text into a set of lowercase whitespace-delimited words.
//!
//! Punctuation is left attached to its word: "Engineer," and "engineer" are different tokens.

use std::collections::BTreeSet;

/// Deduplicated lowercase tokens. Ordered so results render the same way every time.
pub type WordSet = BTreeSet<String>;

/// Splits on runs of whitespace and lowercases each token.
pub fn to_word_set(text: &str) -> WordSet {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Words present in both texts.
pub fn common_words(text_a: &str, text_b: &str) -> WordSet {
    let words_a = to_word_set(text_a);
    let words_b = to_word_set(text_b);
    words_a.intersection(&words_b).cloned().collect()
}
