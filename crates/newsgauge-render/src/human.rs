use indexmap::IndexMap;
use newsgauge_core::QueryResult;
use newsgauge_store::{SourceProfile, Statistics};
use std::fmt::Write as _;
use std::sync::Arc;

/// Plain-text table of visible results for terminals.
pub struct HumanWriter {
    show_articles: bool,
}

impl HumanWriter {
    pub fn new() -> Self {
        Self {
            show_articles: false,
        }
    }

    /// List article titles and sources under each result.
    pub fn show_articles(mut self, show: bool) -> Self {
        self.show_articles = show;
        self
    }

    pub fn render(&self, results: &IndexMap<String, Arc<QueryResult>>) -> anyhow::Result<String> {
        let mut out = String::new();
        if results.is_empty() {
            writeln!(out, "No results.")?;
            return Ok(out);
        }

        let width = results
            .keys()
            .map(|q| q.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);
        writeln!(
            out,
            "{:<width$}  {:>9}  {:>9}  {:>8}",
            "QUERY", "AVG GRADE", "AVG SCORE", "ARTICLES"
        )?;
        for (query, result) in results {
            writeln!(
                out,
                "{:<width$}  {:>9.2}  {:>9.2}  {:>8}",
                query,
                result.avg_grade(),
                result.avg_score(),
                result.articles().len()
            )?;
            if self.show_articles {
                for article in result.articles() {
                    writeln!(
                        out,
                        "    - {} ({}) [grade {}, score {}]",
                        article.title_text(),
                        article.source_name,
                        article.kincaid_grade,
                        article.reading_score
                    )?;
                }
            }
        }
        Ok(out)
    }
}

impl Default for HumanWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// The "more statistics" block: a heading, the article count, then the
/// `word:count` report.
pub fn render_statistics(stats: &Statistics) -> String {
    format!(
        "More Statistics:\n{} articles have been taken into account.\n{}",
        stats.article_count,
        stats.report()
    )
}

/// A source profile as a heading, description, and article list.
pub fn render_profile(profile: &SourceProfile) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", profile.source_name)?;
    if !profile.url.is_empty() {
        writeln!(out, "{}", profile.url)?;
    }
    writeln!(out, "{}", profile.description)?;
    for article in &profile.articles {
        writeln!(out, "  {}  {}", article.published_at, article.title_text())?;
    }
    Ok(out)
}
