//! `bookmatch info` command

use std::path::Path;

use bookmatch_core::error::Result;
use bookmatch_core::EngineState;
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, records_header};

/// Show catalog and engine statistics
pub fn execute(cli: &Cli, engine: &EngineState, catalog_path: Option<&Path>) -> Result<()> {
    let stats = engine.stats();
    let config = engine.config();
    let catalog = catalog_path
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "catalog": catalog,
            "config": config,
            "stats": stats,
        }))?,
        OutputFormat::Human => {
            println!("Catalog:      {}", catalog);
            println!("Records:      {}", stats.records);
            println!("Vocabulary:   {} terms", stats.vocabulary_size);
            println!("Weights:      {} non-zero", stats.non_zero_weights);
            println!(
                "Language:     {}{}",
                config.language,
                if config.stemming { " (stemmed)" } else { "" }
            );
            println!("Fingerprint:  {}", stats.catalog_fingerprint);
            if !cli.quiet {
                println!("Built at:     {}", stats.built_at.to_rfc3339());
                println!(
                    "Build time:   {:.1} ms",
                    stats.build_duration.as_secs_f64() * 1000.0
                );
            }
        }
        OutputFormat::Records => {
            println!("{}", records_header("info", ""));
            println!(
                "I records={} vocabulary={} non_zero={} language={} stemming={} fingerprint={}",
                stats.records,
                stats.vocabulary_size,
                stats.non_zero_weights,
                config.language,
                config.stemming,
                stats.catalog_fingerprint
            );
        }
    }

    Ok(())
}
