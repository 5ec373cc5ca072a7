use crate::store::QueryResultStore;
use newsgauge_core::{NewsgaugeError, QueryResult};
use newsgauge_text::WordCounts;

/// Word-frequency statistics for one stored search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub query: String,
    pub article_count: usize,
    pub counts: WordCounts,
}

impl Statistics {
    /// Count words over every title, then every description, of `result`.
    pub fn of(result: &QueryResult) -> Self {
        let corpus = result.titles().chain(result.descriptions());
        Self {
            query: result.query().to_string(),
            article_count: result.articles().len(),
            counts: WordCounts::from_texts(corpus),
        }
    }

    /// The `word:count` report, most frequent first.
    pub fn report(&self) -> String {
        self.counts.render()
    }
}

impl QueryResultStore {
    /// Statistics for a stored query. Nothing is recomputed except the word
    /// counts, which are built on demand.
    pub fn statistics(&self, query: &str) -> Result<Statistics, NewsgaugeError> {
        self.get(query)
            .map(|result| Statistics::of(result))
            .ok_or_else(|| NewsgaugeError::UnknownQuery(query.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsgauge_core::{Article, ArticleDraft, Readability};

    fn article(title: &str, description: Option<&str>) -> Article {
        Article::from_draft(
            ArticleDraft {
                title: Some(title.to_string()),
                description: description.map(str::to_string),
                ..ArticleDraft::default()
            },
            Readability::default(),
        )
    }

    fn sample_store() -> QueryResultStore {
        let mut store = QueryResultStore::new();
        store
            .record_search(
                "TestQuery",
                vec![
                    article("Title One", Some("Description One")),
                    article("Title Two", Some("Description Two")),
                    article("Title Three", Some("Description Three")),
                ],
            )
            .unwrap();
        store
    }

    #[test]
    fn counts_titles_and_descriptions() {
        let stats = sample_store().statistics("TestQuery").unwrap();
        assert_eq!(stats.article_count, 3);
        assert_eq!(stats.counts.get("title"), 3);
        assert_eq!(stats.counts.get("description"), 3);
        assert_eq!(stats.counts.get("one"), 2);
        assert_eq!(stats.counts.get("two"), 2);
        assert_eq!(stats.counts.get("three"), 2);
    }

    #[test]
    fn report_leads_with_highest_count() {
        let stats = sample_store().statistics("TestQuery").unwrap();
        let first = stats.report().lines().next().unwrap().to_string();
        assert!(first == "description:3" || first == "title:3");
    }

    #[test]
    fn missing_descriptions_are_empty_text() {
        let mut store = QueryResultStore::new();
        store
            .record_search("q", vec![article("Markets rally today", None)])
            .unwrap();
        let stats = store.statistics("q").unwrap();
        assert_eq!(stats.counts.get("markets"), 1);
        assert_eq!(stats.counts.len(), 3);
    }

    #[test]
    fn unknown_query_is_an_error() {
        let err = sample_store().statistics("nothing").unwrap_err();
        assert!(matches!(err, NewsgaugeError::UnknownQuery(q) if q == "nothing"));
    }
}
