use super::read_stdin;
use crate::Cli;
use anyhow::Result;
use newsgauge_text::TextCounts;

pub fn run(cli: &Cli, text: Option<&str>) -> Result<()> {
    let text = match text {
        Some(text) => text.to_string(),
        None => read_stdin()?,
    };

    let counts = TextCounts::of(&text);
    let readability = counts.readability();
    tracing::info!(
        sentences = counts.sentences,
        words = counts.words,
        syllables = counts.syllables,
        "scored text"
    );

    if !cli.is_quiet() {
        println!("Sentences: {}", counts.sentences);
        println!("Words: {}", counts.words);
        println!("Syllables: {}", counts.syllables);
    }
    println!("Grade: {:.2}", readability.grade);
    println!("Score: {:.2}", readability.score);

    Ok(())
}
