//! `bookmatch terms` command

use bookmatch_core::error::{BookmatchError, Result};
use bookmatch_core::EngineState;
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{escape_quotes, print_json, records_header};

/// Show the heaviest TF-IDF terms of one book
pub fn execute(cli: &Cli, engine: &EngineState, title: &str, limit: usize) -> Result<()> {
    let terms = engine
        .top_terms(title, limit)
        .ok_or_else(|| BookmatchError::not_found("title", title))?;

    match cli.format {
        OutputFormat::Json => {
            let terms: Vec<_> = terms
                .iter()
                .map(|(term, weight)| json!({ "term": term, "weight": weight }))
                .collect();
            print_json(&json!({ "title": title, "terms": terms }))?;
        }
        OutputFormat::Human => {
            if terms.is_empty() {
                println!("No weighted terms for \"{}\".", title);
                return Ok(());
            }
            if !cli.quiet {
                println!("Top terms for \"{}\":", title);
            }
            let width = terms.iter().map(|(t, _)| t.chars().count()).max().unwrap_or(0);
            for (term, weight) in &terms {
                println!("  {:<width$}  {:.4}", term, weight, width = width);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "terms",
                    &format!("title=\"{}\" results={}", escape_quotes(title), terms.len())
                )
            );
            for (term, weight) in &terms {
                println!("T {} {:.6}", term, weight);
            }
        }
    }

    Ok(())
}
