//! stem CLI - fuzzy autocomplete over a word list
//!
//! Loads a newline-delimited word list into a radix tree, then answers
//! prefix and fuzzy-completion queries against it.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stemtree::{load_words, FuzzyMatcher, RadixTree};

#[derive(Parser)]
#[command(name = "stem")]
#[command(about = "Fuzzy autocomplete over a newline-delimited word list")]
#[command(version)]
struct Cli {
    /// Path to the word list
    #[arg(short, long, default_value = "words.txt")]
    words: PathBuf,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest completions for a query
    Suggest {
        /// The query string
        query: String,
        /// Maximum edit distance from the query
        #[arg(short, long, default_value = "3")]
        distance: usize,
        /// Maximum number of suggestions
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// List words starting with a prefix
    List {
        /// The prefix (empty lists every word)
        #[arg(default_value = "")]
        prefix: String,
        /// Maximum number of words to return
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Look up a single word
    Get {
        /// The word
        word: String,
    },

    /// Word-list statistics
    Stats,

    /// Interactive prompt loop
    Repl {
        /// Maximum edit distance from each query
        #[arg(short, long, default_value = "3")]
        distance: usize,
        /// Maximum number of suggestions per query
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let tree = load_words(&cli.words)?;

    match cli.command {
        Commands::Suggest {
            query,
            distance,
            limit,
        } => {
            let matcher = FuzzyMatcher::new(&tree);
            let suggestions = matcher.suggest(&query, distance, limit);
            output(
                &cli.format,
                &serde_json::json!({
                    "query": query,
                    "count": suggestions.len(),
                    "results": suggestions
                }),
            );
        }

        Commands::List { prefix, limit } => {
            let mut words = tree.keys_with_prefix(&prefix);
            if let Some(limit) = limit {
                words.truncate(limit);
            }
            output(
                &cli.format,
                &serde_json::json!({
                    "prefix": prefix,
                    "count": words.len(),
                    "words": words
                }),
            );
        }

        Commands::Get { word } => match tree.get(&word) {
            Some(_) => {
                output(
                    &cli.format,
                    &serde_json::json!({
                        "status": "ok",
                        "word": word
                    }),
                );
            }
            None => {
                output(
                    &cli.format,
                    &serde_json::json!({
                        "status": "error",
                        "message": format!("Word not found: {}", word)
                    }),
                );
                std::process::exit(1);
            }
        },

        Commands::Stats => {
            output(
                &cli.format,
                &serde_json::json!({
                    "words": cli.words.display().to_string(),
                    "count": tree.len()
                }),
            );
        }

        Commands::Repl { distance, limit } => {
            repl(&tree, distance, limit)?;
        }
    }

    Ok(())
}

/// Read queries from stdin until EOF, printing suggestions for each
fn repl(tree: &RadixTree<String>, distance: usize, limit: usize) -> anyhow::Result<()> {
    let matcher = FuzzyMatcher::new(tree);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("Search for: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        for suggestion in matcher.suggest(query, distance, limit) {
            println!("{} ({})", suggestion.word, suggestion.distance);
        }
    }
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
