use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for querylens
#[derive(Parser, Debug)]
#[command(name = "querylens")]
#[command(about = "Classify the intent behind developer queries", long_about = None)]
pub struct Cli {
    /// Config file to use instead of `~/.querylens/config.toml`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract entities, question patterns, complexity and keywords from a query
    Analyze {
        /// Query to analyze
        query: String,

        /// Auxiliary context entry, echoed back by key
        #[arg(short, long = "context", value_name = "KEY=VALUE", value_parser = parse_context_entry)]
        context: Vec<(String, String)>,
    },

    /// Analyze a query and resolve its intent
    Classify {
        /// Query to classify
        query: String,

        /// Auxiliary context entry, echoed back by key
        #[arg(short, long = "context", value_name = "KEY=VALUE", value_parser = parse_context_entry)]
        context: Vec<(String, String)>,

        /// Record the resolved intent under this session id
        #[arg(long)]
        session: Option<String>,
    },

    /// Resolve the intent of an analysis stored as JSON
    Resolve {
        /// Path to the analysis JSON, bare or wrapped in `{"analysis": ...}`
        path: PathBuf,
    },

    /// Show configuration
    Config {
        /// Include the effective configuration, defaults included
        #[arg(long)]
        full: bool,
    },
}

fn parse_context_entry(entry: &str) -> Result<(String, String), String> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_owned(), value.to_owned()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{entry}'")),
    }
}
