use crate::{Cli, Format};
use anyhow::{Context, Result};
use newsgauge_core::{Article, ArticleDraft};
use newsgauge_render::{HumanWriter, JsonlWriter, render_profile, render_statistics};
use newsgauge_store::{QueryResultStore, RecentQueryList, SourceProfile};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One recorded search as produced by a fetch layer.
#[derive(Debug, Deserialize)]
pub struct SearchRecord {
    pub query: String,
    #[serde(default)]
    pub articles: Vec<ArticleDraft>,
}

pub struct ReplayOptions<'a> {
    pub input: &'a Path,
    pub format: Format,
    pub articles: bool,
    pub stats: Option<&'a str>,
    pub source: Option<&'a str>,
    pub limit: usize,
}

pub fn load_searches(path: &Path) -> Result<Vec<SearchRecord>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn run(cli: &Cli, opts: &ReplayOptions<'_>) -> Result<()> {
    let config = cli.engine_config()?;
    let searches = load_searches(opts.input)?;

    let mut store = QueryResultStore::from_config(&config);
    let mut history = RecentQueryList::from_config(&config);
    let mut last_query = String::new();

    for search in searches {
        let articles = newsgauge_text::annotate(search.articles);
        let result = match store.record_search(&search.query, articles) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(query = %search.query, "skipping search: {err}");
                continue;
            }
        };
        tracing::info!(
            query = result.query(),
            articles = result.articles().len(),
            avg_grade = result.avg_grade(),
            avg_score = result.avg_score(),
            "recorded search"
        );
        history.touch(result.query());
        last_query = result.query().to_string();
    }

    if !cli.is_quiet() {
        eprintln!(
            "Replayed into {} stored queries ({} in history, cap {})",
            store.len(),
            history.len(),
            history.cap()
        );
    }

    if let Some(query) = opts.stats {
        let stats = store.statistics(query)?;
        println!("{}", render_statistics(&stats));
        return Ok(());
    }

    let visible = history.visible(&store);

    if let Some(source) = opts.source {
        let articles: Vec<Article> = visible
            .values()
            .flat_map(|result| result.articles())
            .filter(|article| article.source_name == source)
            .cloned()
            .collect();
        let profile = SourceProfile::from_articles(source, articles, opts.limit);
        print!("{}", render_profile(&profile)?);
        return Ok(());
    }

    let output = match opts.format {
        Format::Jsonl => JsonlWriter::new(&last_query, history.cap())
            .include_articles(opts.articles)
            .render(&visible)?,
        Format::Human => HumanWriter::new()
            .show_articles(opts.articles)
            .render(&visible)?,
    };
    print!("{output}");

    Ok(())
}
