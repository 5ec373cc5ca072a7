use crate::syllable::count_syllables;
use crate::tokenizer::Tokenizer;
use newsgauge_core::{Readability, ReadabilityAverages};

/// Flesch-Kincaid grade level weights.
const FK_SENTENCE_WEIGHT: f64 = 0.39;
const FK_SYLLABLE_WEIGHT: f64 = 11.8;
const FK_OFFSET: f64 = 15.59;

/// Flesch reading ease weights.
const FRE_BASE: f64 = 206.835;
const FRE_SENTENCE_WEIGHT: f64 = 1.015;
const FRE_SYLLABLE_WEIGHT: f64 = 84.6;

/// Sentence, word and syllable counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

impl TextCounts {
    pub fn of(text: &str) -> Self {
        Self {
            sentences: Tokenizer::count_sentences(text),
            words: Tokenizer::count_words(text),
            syllables: count_syllables(text),
        }
    }

    /// Flesch-Kincaid grade level. Zero when there are no sentences or words.
    pub fn grade(&self) -> f64 {
        match self.ratios() {
            Some((words_per_sentence, syllables_per_word)) => {
                FK_SENTENCE_WEIGHT * words_per_sentence + FK_SYLLABLE_WEIGHT * syllables_per_word
                    - FK_OFFSET
            }
            None => 0.0,
        }
    }

    /// Flesch reading ease (higher is easier). Zero when there are no
    /// sentences or words.
    pub fn score(&self) -> f64 {
        match self.ratios() {
            Some((words_per_sentence, syllables_per_word)) => {
                FRE_BASE
                    - FRE_SENTENCE_WEIGHT * words_per_sentence
                    - FRE_SYLLABLE_WEIGHT * syllables_per_word
            }
            None => 0.0,
        }
    }

    pub fn readability(&self) -> Readability {
        Readability {
            grade: self.grade(),
            score: self.score(),
        }
    }

    fn ratios(&self) -> Option<(f64, f64)> {
        if self.sentences == 0 || self.words == 0 {
            return None;
        }
        let words = self.words as f64;
        Some((words / self.sentences as f64, self.syllables as f64 / words))
    }
}

/// Readability of a single text.
pub fn compute_readability(text: &str) -> Readability {
    TextCounts::of(text).readability()
}

/// Mean of the per-text metrics. Each text is scored on its own counts before
/// averaging; counts are never pooled across texts. An empty batch is 0.0.
pub fn average_readability<'a, I>(texts: I) -> ReadabilityAverages
where
    I: IntoIterator<Item = &'a str>,
{
    let mut n = 0usize;
    let mut grade_sum = 0.0;
    let mut score_sum = 0.0;
    for text in texts {
        let r = compute_readability(text);
        grade_sum += r.grade;
        score_sum += r.score;
        n += 1;
    }

    if n == 0 {
        return ReadabilityAverages::default();
    }
    ReadabilityAverages {
        avg_grade: grade_sum / n as f64,
        avg_score: score_sum / n as f64,
    }
}

pub fn average_grade<'a, I>(texts: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    average_readability(texts).avg_grade
}

pub fn average_score<'a, I>(texts: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    average_readability(texts).avg_score
}
