//! `bookmatch recommend` command

use bookmatch_core::error::Result;
use bookmatch_core::{EngineState, RecommendOptions, Recommendation};
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{escape_quotes, print_json, records_header, truncate};

const DESCRIPTION_WIDTH: usize = 100;

/// Execute the recommend command
pub fn execute(
    cli: &Cli,
    engine: &EngineState,
    title: &str,
    options: &RecommendOptions,
) -> Result<()> {
    let results = engine.recommend_with(title, options);
    debug!(title, results = results.len(), limit = options.limit, "recommend");
    output(cli, title, &results)
}

/// Print one result set in the selected format
pub fn output(cli: &Cli, title: &str, results: &[Recommendation<'_>]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(results)?,
        OutputFormat::Human => output_human(cli, title, results),
        OutputFormat::Records => output_records(title, results),
    }
    Ok(())
}

fn output_human(cli: &Cli, title: &str, results: &[Recommendation<'_>]) {
    if results.is_empty() {
        println!("No similar books found for \"{}\".", title);
        return;
    }

    if !cli.quiet {
        println!("Books similar to \"{}\":", title);
        println!();
    }

    for rec in results {
        println!("{}. {}", rec.rank, rec.record.title());
        println!(
            "   {} | {} | score {:.4}",
            rec.record.author(),
            rec.record.genre(),
            rec.score
        );
        if !cli.quiet {
            println!(
                "   {}",
                truncate(rec.record.description(), DESCRIPTION_WIDTH)
            );
        }
    }
}

fn output_records(title: &str, results: &[Recommendation<'_>]) {
    println!(
        "{}",
        records_header(
            "recommend",
            &format!(
                "query=\"{}\" results={}",
                escape_quotes(title),
                results.len()
            )
        )
    );

    for rec in results {
        println!(
            "R {} {:.6} \"{}\" author=\"{}\" genre=\"{}\"",
            rec.rank,
            rec.score,
            escape_quotes(rec.record.title()),
            escape_quotes(rec.record.author()),
            escape_quotes(rec.record.genre())
        );
    }
}
