use crate::store::QueryResultStore;
use indexmap::IndexMap;
use newsgauge_core::{EngineConfig, QueryResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Move `query` to the front of `history`, dropping any earlier copy, and keep
/// at most `cap` entries.
pub fn touch_history(mut history: Vec<String>, query: &str, cap: usize) -> Vec<String> {
    history.retain(|q| q != query);
    history.insert(0, query.to_string());
    history.truncate(cap);
    history
}

/// A caller's recent queries, most recent first, without duplicates.
///
/// Owned by one session; the store never sees it except through
/// [`RecentQueryList::visible`]. Deserializing re-applies trimming, dedup and
/// the cap, so a restored list holds the same invariants as a built one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedQueryList")]
pub struct RecentQueryList {
    queries: Vec<String>,
    cap: usize,
}

/// Serialized shape of a [`RecentQueryList`], before validation.
#[derive(Deserialize)]
struct SavedQueryList {
    queries: Vec<String>,
    cap: usize,
}

impl From<SavedQueryList> for RecentQueryList {
    fn from(saved: SavedQueryList) -> Self {
        Self::from_queries(saved.queries, saved.cap)
    }
}

impl RecentQueryList {
    pub fn new(cap: usize) -> Self {
        Self {
            queries: Vec::new(),
            cap: cap.max(1),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.history_cap)
    }

    /// Restore a list from previously saved queries, re-applying dedup and cap.
    pub fn from_queries<I, S>(queries: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new(cap);
        let mut saved: Vec<String> = queries
            .into_iter()
            .map(|q| q.as_ref().trim().to_string())
            .filter(|q| !q.is_empty())
            .collect();
        // Oldest first so the most recent ends up at the front
        saved.reverse();
        for query in saved {
            list.touch(&query);
        }
        list
    }

    /// Record `query` as the most recent search. Blank queries are ignored.
    pub fn touch(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let queries = std::mem::take(&mut self.queries);
        self.queries = touch_history(queries, query, self.cap);
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.queries
    }

    /// Stored results for this history, bounded by the list's cap.
    pub fn visible(&self, store: &QueryResultStore) -> IndexMap<String, Arc<QueryResult>> {
        store.visible_results(self.iter(), self.cap)
    }
}
