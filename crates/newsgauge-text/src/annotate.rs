use crate::readability::compute_readability;
use newsgauge_core::{Article, ArticleDraft};
use rayon::prelude::*;

/// Score each draft's description and attach the rounded grade and score.
///
/// Drafts are scored in parallel; the output keeps input order.
pub fn annotate(drafts: Vec<ArticleDraft>) -> Vec<Article> {
    tracing::debug!(drafts = drafts.len(), "annotating articles");
    drafts
        .into_par_iter()
        .map(|draft| {
            let readability = compute_readability(draft.description.as_deref().unwrap_or(""));
            Article::from_draft(draft, readability)
        })
        .collect()
}
