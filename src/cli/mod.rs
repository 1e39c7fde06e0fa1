//! CLI argument parsing for bookmatch
//!
//! Global flags select the catalog, configuration and output format; each
//! subcommand runs against one engine built from that catalog.

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bookmatch_core::text::Language;
pub use output::OutputFormat;
use parse::{parse_language, parse_score};

/// Bookmatch - content-based book recommendations
#[derive(Parser, Debug)]
#[command(name = "bookmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// CSV catalog with title, author, genre and description columns
    #[arg(long, global = true, env = "BOOKMATCH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Configuration file (default: ./bookmatch.toml, then the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Stop-word language: spanish, english or none
    #[arg(long, global = true, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Stem terms before weighting
    #[arg(long, global = true, overrides_with = "no_stemming")]
    pub stemming: bool,

    /// Disable stemming even if the config file enables it
    #[arg(long, global = true, overrides_with = "stemming")]
    pub no_stemming: bool,

    /// Keep catalog rows whose title repeats an earlier row
    #[arg(long, global = true)]
    pub allow_duplicates: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend books similar to a title
    Recommend {
        /// Exact title of the book to start from
        title: String,

        /// Number of recommendations (default from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Drop recommendations scoring below this value
        #[arg(long, value_parser = parse_score)]
        min_score: Option<f64>,
    },

    /// List catalog titles in file order
    List,

    /// Show the similarity score between two books
    Similarity {
        /// First title
        first: String,

        /// Second title
        second: String,
    },

    /// Show the most heavily weighted terms of a book
    Terms {
        /// Exact title of the book
        title: String,

        /// Number of terms to show
        #[arg(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// Show catalog and engine statistics
    Info,

    /// Read titles from stdin and answer each with recommendations
    Interactive {
        /// Number of recommendations per title (default from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
}
