use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Normalized tokens this short or shorter are dropped from frequency counts.
const MAX_DROPPED_LEN: usize = 2;

/// Anything outside Unicode general category L.
static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\P{L}+").expect("valid non-letter pattern"));

/// Strip every non-letter character and lowercase what remains.
pub fn normalize_token(token: &str) -> String {
    NON_LETTER.replace_all(token, "").to_lowercase()
}

/// Whitespace-split and normalize every text, keeping empty tokens.
pub fn normalized_words<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(normalize_token)
        .collect()
}

/// Drop tokens of two characters or fewer (including empty ones).
pub fn filter_short(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .filter(|w| w.chars().count() > MAX_DROPPED_LEN)
        .collect()
}

/// Occurrence counts of normalized words over a batch of texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, usize>,
}

impl WordCounts {
    /// Count already-normalized words.
    pub fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            *counts.entry(word).or_default() += 1;
        }
        Self { counts }
    }

    /// Split, normalize, filter and count.
    #[tracing::instrument(skip_all)]
    pub fn from_texts<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let counts = Self::from_words(filter_short(normalized_words(texts)));
        tracing::debug!(distinct = counts.len(), "counted word frequencies");
        counts
    }

    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries by descending count. Equal counts are ordered by word so the
    /// output is stable across runs.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// `word:count` lines, most frequent first.
    pub fn render(&self) -> String {
        self.sorted()
            .iter()
            .map(|(word, count)| format!("{word}:{count}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Frequency report over `texts` as newline-joined `word:count` lines.
pub fn word_frequency_report<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    WordCounts::from_texts(texts).render()
}
