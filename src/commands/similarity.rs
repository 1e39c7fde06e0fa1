//! `bookmatch similarity` command

use bookmatch_core::error::{BookmatchError, Result};
use bookmatch_core::EngineState;
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{escape_quotes, print_json, records_header};

/// Show the cosine similarity of two books
pub fn execute(cli: &Cli, engine: &EngineState, first: &str, second: &str) -> Result<()> {
    let row = |title: &str| {
        engine
            .catalog()
            .position(title)
            .ok_or_else(|| BookmatchError::not_found("title", title))
    };
    let score = engine.similarity_matrix().get(row(first)?, row(second)?);

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "first": first,
            "second": second,
            "score": score,
        }))?,
        OutputFormat::Human => {
            if cli.quiet {
                println!("{:.4}", score);
            } else {
                println!("\"{}\" vs \"{}\": {:.4}", first, second, score);
            }
        }
        OutputFormat::Records => {
            println!("{}", records_header("similarity", ""));
            println!(
                "S \"{}\" \"{}\" score={:.6}",
                escape_quotes(first),
                escape_quotes(second),
                score
            );
        }
    }

    Ok(())
}
