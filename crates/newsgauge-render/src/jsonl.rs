use indexmap::IndexMap;
use newsgauge_core::{Article, QueryResult};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// Writes visible search results in JSONL format.
pub struct JsonlWriter {
    query: String,
    history_cap: usize,
    include_articles: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'a str,
    query: &'a str,
    history_cap: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ResultEntry<'a> {
    query: &'a str,
    avg_grade: f64,
    avg_score: f64,
    article_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    articles: Option<&'a [Article]>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    total_results: usize,
    total_articles: usize,
}

impl JsonlWriter {
    pub fn new(query: &str, history_cap: usize) -> Self {
        Self {
            query: query.to_string(),
            history_cap,
            include_articles: false,
        }
    }

    /// Include the full article records on each result line.
    pub fn include_articles(mut self, include: bool) -> Self {
        self.include_articles = include;
        self
    }

    /// Render visible results as a JSONL string.
    pub fn render(&self, results: &IndexMap<String, Arc<QueryResult>>) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, results)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        results: &IndexMap<String, Arc<QueryResult>>,
    ) -> anyhow::Result<()> {
        // Header
        let header = Header {
            version: "1",
            query: &self.query,
            history_cap: self.history_cap,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        // One line per visible result, in history order
        let mut total_articles = 0usize;
        for (query, result) in results {
            let entry = ResultEntry {
                query,
                avg_grade: result.avg_grade(),
                avg_score: result.avg_score(),
                article_count: result.articles().len(),
                articles: self.include_articles.then(|| result.articles()),
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
            total_articles += result.articles().len();
        }

        // Footer
        let footer = Footer {
            total_results: results.len(),
            total_articles,
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}
