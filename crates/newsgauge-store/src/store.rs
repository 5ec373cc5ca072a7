use indexmap::IndexMap;
use newsgauge_core::{Article, EngineConfig, NewsgaugeError, QueryResult};
use newsgauge_text::average_readability;
use std::sync::Arc;

#[derive(Debug)]
struct Slot {
    result: Arc<QueryResult>,
    /// Value of the store's record counter when this query was last recorded.
    recorded_at: u64,
}

/// One [`QueryResult`] per distinct query, iterated in first-insertion order.
///
/// Recording an existing query replaces its value in place. With a capacity
/// set, recording a new query into a full store evicts the least recently
/// recorded entry; without one, entries live as long as the store.
#[derive(Debug, Default)]
pub struct QueryResultStore {
    entries: IndexMap<String, Slot>,
    capacity: Option<usize>,
    clock: u64,
}

impl QueryResultStore {
    /// An unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding at most `capacity` queries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        match config.store_capacity {
            Some(capacity) => Self::with_capacity(capacity),
            None => Self::new(),
        }
    }

    /// Score the article titles, build a result, and store it under the
    /// trimmed query, overwriting any earlier result for that query.
    pub fn record_search(
        &mut self,
        query: &str,
        articles: Vec<Article>,
    ) -> Result<Arc<QueryResult>, NewsgaugeError> {
        let key = query.trim();
        if key.is_empty() {
            return Err(NewsgaugeError::EmptyQuery);
        }

        let averages = average_readability(articles.iter().map(Article::title_text));
        let result = Arc::new(QueryResult::new(key, articles, averages));
        self.insert(key, Arc::clone(&result));
        Ok(result)
    }

    fn insert(&mut self, key: &str, result: Arc<QueryResult>) {
        self.clock += 1;
        let recorded_at = self.clock;

        if let Some(slot) = self.entries.get_mut(key) {
            tracing::debug!(query = key, "overwriting stored result");
            *slot = Slot {
                result,
                recorded_at,
            };
            return;
        }

        if self.capacity.is_some_and(|capacity| self.entries.len() >= capacity) {
            self.evict_oldest();
        }
        self.entries.insert(
            key.to_string(),
            Slot {
                result,
                recorded_at,
            },
        );
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .enumerate()
            .min_by_key(|(_, (_, slot))| slot.recorded_at)
            .map(|(index, _)| index);
        if let Some((query, _)) = oldest.and_then(|index| self.entries.shift_remove_index(index)) {
            tracing::debug!(query = %query, "evicted least recently recorded result");
        }
    }

    /// Exact, case-sensitive lookup of a trimmed query.
    pub fn get(&self, query: &str) -> Option<&Arc<QueryResult>> {
        self.entries.get(query.trim()).map(|slot| &slot.result)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Stored queries in insertion order.
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Rebuild the results for a caller's history purely from stored values.
    ///
    /// Walks at most `cap` history entries in order. Entries with no stored
    /// result are skipped, but still count toward `cap`.
    pub fn visible_results<'a, I>(
        &self,
        history: I,
        cap: usize,
    ) -> IndexMap<String, Arc<QueryResult>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        history
            .into_iter()
            .take(cap)
            .filter_map(|query| {
                let query = query.trim();
                self.get(query)
                    .map(|result| (query.to_string(), Arc::clone(result)))
            })
            .collect()
    }
}
