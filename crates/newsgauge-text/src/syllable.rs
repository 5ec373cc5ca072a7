//! Vowel-group syllable estimation.
//!
//! No dictionary: a word's syllables are its runs of `a e i o u y`, minus a
//! silent trailing `e`, with a floor of one.

use crate::tokenizer::Tokenizer;

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// Estimate the syllable count of a single word. Returns 0 only when the word
/// has no ASCII letters at all.
pub fn estimate_syllables(word: &str) -> usize {
    let normalized: Vec<u8> = word
        .to_lowercase()
        .bytes()
        .filter(u8::is_ascii_lowercase)
        .collect();
    if normalized.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut prev_vowel = false;
    for &b in &normalized {
        let vowel = is_vowel(b);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if normalized.ends_with(b"e") && count > 1 {
        // consonant + "le" ("little", "table") is voiced
        let len = normalized.len();
        let voiced_le = len >= 3 && normalized.ends_with(b"le") && !is_vowel(normalized[len - 3]);
        if !voiced_le {
            count -= 1;
        }
    }

    count.max(1)
}

/// Total syllables over every word the tokenizer finds in `text`.
pub fn count_syllables(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    Tokenizer::split_words(text).map(estimate_syllables).sum()
}
