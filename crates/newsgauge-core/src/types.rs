use serde::{Deserialize, Serialize};

/// Flesch-Kincaid grade and Flesch reading score for a single text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub grade: f64,
    pub score: f64,
}

impl Readability {
    /// Both metrics rounded to the nearest integer, as stored on an [`Article`].
    pub fn rounded(&self) -> (i32, i32) {
        (self.grade.round() as i32, self.score.round() as i32)
    }
}

/// Mean of per-text readability values over a batch of texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityAverages {
    pub avg_grade: f64,
    pub avg_score: f64,
}

/// An article as handed over by a fetch layer, before readability is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub url: String,
    pub source_name: String,
    pub source_url: String,
    pub published_at: String,
    pub description: Option<String>,
}

/// A single news article with its readability already scored.
///
/// `kincaid_grade` and `reading_score` are computed from the description and
/// rounded. Title and description may be absent upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: Option<String>,
    pub url: String,
    pub source_name: String,
    pub source_url: String,
    pub published_at: String,
    pub kincaid_grade: i32,
    pub reading_score: i32,
    pub description: Option<String>,
}

impl Article {
    /// Attach rounded readability metrics to a draft.
    pub fn from_draft(draft: ArticleDraft, readability: Readability) -> Self {
        let (kincaid_grade, reading_score) = readability.rounded();
        Self {
            title: draft.title,
            url: draft.url,
            source_name: draft.source_name,
            source_url: draft.source_url,
            published_at: draft.published_at,
            kincaid_grade,
            reading_score,
            description: draft.description,
        }
    }

    /// Title text, with an absent title treated as empty.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Description text, with an absent description treated as empty.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// The outcome of one search: the articles returned plus readability
/// averages over their titles. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    query: String,
    articles: Vec<Article>,
    averages: ReadabilityAverages,
}

impl QueryResult {
    pub fn new(
        query: impl Into<String>,
        articles: Vec<Article>,
        averages: ReadabilityAverages,
    ) -> Self {
        Self {
            query: query.into(),
            articles,
            averages,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn avg_grade(&self) -> f64 {
        self.averages.avg_grade
    }

    pub fn avg_score(&self) -> f64 {
        self.averages.avg_score
    }

    pub fn averages(&self) -> ReadabilityAverages {
        self.averages
    }

    /// Article titles in order, absent titles as empty strings.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(Article::title_text)
    }

    /// Article descriptions in order, absent descriptions as empty strings.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(Article::description_text)
    }
}
