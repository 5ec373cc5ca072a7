mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use newsgauge_core::EngineConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Newsgauge: readability and word-frequency analytics for news search results.
#[derive(Parser, Debug)]
#[command(name = "newsgauge", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of recent queries kept and shown (overrides the config file)
    #[arg(long, global = true)]
    history_cap: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grade and reading score for a text (stdin when omitted)
    Readability {
        /// Text to score
        text: Option<String>,
    },

    /// Word-frequency report, one text per input line
    Frequency {
        /// Input files (stdin when none are given)
        files: Vec<PathBuf>,
    },

    /// Replay recorded searches through a store and print what stays visible
    Replay {
        /// JSON array of {"query", "articles"} objects
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Human)]
        format: Format,

        /// Include article records in the output
        #[arg(long)]
        articles: bool,

        /// Print word statistics for one stored query instead
        #[arg(long, conflicts_with = "source")]
        stats: Option<String>,

        /// Print the profile of one news source across visible results instead
        #[arg(long)]
        source: Option<String>,

        /// Maximum articles listed in a source profile
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Jsonl,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Config file values (or defaults) with command-line overrides applied.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => EngineConfig::default(),
        };
        match self.history_cap {
            Some(cap) => Ok(config.with_history_cap(cap)?),
            None => Ok(config),
        }
    }

    fn log_filter(&self) -> EnvFilter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        EnvFilter::new(level)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(cli.log_filter())
        .init();

    match &cli.command {
        Command::Readability { text } => commands::readability::run(&cli, text.as_deref()),
        Command::Frequency { files } => commands::frequency::run(&cli, files),
        Command::Replay {
            input,
            format,
            articles,
            stats,
            source,
            limit,
        } => commands::replay::run(
            &cli,
            &commands::replay::ReplayOptions {
                input,
                format: *format,
                articles: *articles,
                stats: stats.as_deref(),
                source: source.as_deref(),
                limit: *limit,
            },
        ),
    }
}
