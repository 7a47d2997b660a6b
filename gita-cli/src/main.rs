//! Gita CLI - Command-line reader for the bundled scripture catalog

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::NavStep;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate a timeout argument (must be at least 1 ms)
fn parse_timeout(s: &str) -> Result<u64, String> {
    let n: u64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("timeout must be at least 1 ms".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "gita")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON catalog to read instead of the bundled one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display a verse with its commentary
    Read {
        /// Chapter number (defaults to 1)
        chapter: Option<String>,

        /// Verse number (defaults to 1)
        verse: Option<String>,

        /// Commentary source to show
        #[arg(short, long)]
        commentary: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay navigation steps from a reader location
    Navigate {
        /// Starting location
        #[arg(short, long, default_value = "/read/gita/1/1")]
        from: String,

        /// Steps: next, prev, verse:N, chapter:N, commentary:KEY, recover
        #[arg(required = true)]
        steps: Vec<NavStep>,
    },

    /// List the chapters of the catalog
    Chapters {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the texts in the library
    Library {
        /// Search title, description and themes
        #[arg(short, long)]
        search: Option<String>,

        /// Theme filter ("all" for every theme)
        #[arg(short, long)]
        theme: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSON catalog file
    Validate {
        /// Catalog file path
        input: PathBuf,
    },

    /// Ask a question about the teachings
    Ask {
        /// Question text (defaults to the verse prompt when --verse is given)
        question: Option<String>,

        /// Verse the question is about, as chapter.verse
        #[arg(long)]
        verse: Option<String>,

        /// Give up after this many milliseconds
        #[arg(long, default_value = "10000", value_parser = parse_timeout)]
        timeout_ms: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "gita_cli=debug,gita_core=debug"
    } else {
        "gita_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = cli.catalog.as_deref();

    match cli.command {
        Commands::Read {
            chapter,
            verse,
            commentary,
            json,
        } => commands::read(
            catalog,
            chapter.as_deref(),
            verse.as_deref(),
            commentary.as_deref(),
            json,
        ),

        Commands::Navigate { from, steps } => commands::navigate(catalog, &from, &steps),

        Commands::Chapters { json } => commands::chapters(catalog, json),

        Commands::Library {
            search,
            theme,
            json,
        } => commands::library(search.as_deref(), theme.as_deref(), json),

        Commands::Validate { input } => commands::validate(&input),

        Commands::Ask {
            question,
            verse,
            timeout_ms,
            json,
        } => {
            commands::ask(
                catalog,
                question.as_deref(),
                verse.as_deref(),
                timeout_ms,
                json,
            )
            .await
        }
    }
}
