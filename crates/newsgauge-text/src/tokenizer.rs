use regex::Regex;
use std::sync::LazyLock;

/// One or more sentence terminators plus any trailing whitespace.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s*").expect("valid sentence pattern"));

/// ASCII letter runs, optionally joined to one more run by an apostrophe ("don't").
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?").expect("valid word pattern"));

/// Pattern-based sentence and word splitter used by readability scoring.
pub struct Tokenizer;

impl Tokenizer {
    /// Split text into sentence fragments.
    ///
    /// The text is trimmed first. Trailing empty fragments are dropped, so a
    /// final terminator does not add a sentence, but a leading terminator
    /// does leave an empty first fragment.
    pub fn split_sentences(text: &str) -> Vec<&str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let mut fragments: Vec<&str> = SENTENCE_BREAK.split(trimmed).collect();
        while fragments.last().is_some_and(|f| f.is_empty()) {
            fragments.pop();
        }
        fragments
    }

    /// Words in order of appearance. Digits and punctuation never form words.
    pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
        WORD.find_iter(text).map(|m| m.as_str())
    }

    pub fn count_sentences(text: &str) -> usize {
        Self::split_sentences(text).len()
    }

    pub fn count_words(text: &str) -> usize {
        if text.trim().is_empty() {
            return 0;
        }
        Self::split_words(text).count()
    }
}
