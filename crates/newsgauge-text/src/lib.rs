//! Text analytics: tokenizing, syllable estimation, readability formulas,
//! word-frequency reports, and article annotation.

pub mod annotate;
pub mod frequency;
pub mod readability;
pub mod syllable;
pub mod tokenizer;

pub use annotate::annotate;
pub use frequency::{WordCounts, word_frequency_report};
pub use readability::{
    TextCounts, average_grade, average_readability, average_score, compute_readability,
};
pub use syllable::{count_syllables, estimate_syllables};
pub use tokenizer::Tokenizer;
