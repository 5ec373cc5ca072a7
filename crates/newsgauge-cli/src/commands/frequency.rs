use super::read_stdin;
use crate::Cli;
use anyhow::{Context, Result};
use newsgauge_text::WordCounts;
use std::fs;
use std::path::PathBuf;

pub fn run(cli: &Cli, files: &[PathBuf]) -> Result<()> {
    let mut corpus = String::new();
    if files.is_empty() {
        corpus = read_stdin()?;
    } else {
        for path in files {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            corpus.push_str(&content);
            if !content.ends_with('\n') {
                corpus.push('\n');
            }
        }
    }

    let texts: Vec<&str> = corpus.lines().collect();
    let counts = WordCounts::from_texts(texts.iter().copied());

    if !cli.is_quiet() {
        eprintln!("{} texts, {} distinct words", texts.len(), counts.len());
    }
    let report = counts.render();
    if !report.is_empty() {
        println!("{report}");
    }

    Ok(())
}
