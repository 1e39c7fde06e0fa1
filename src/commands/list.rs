//! `bookmatch list` command

use bookmatch_core::error::Result;
use bookmatch_core::EngineState;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{escape_quotes, print_json, records_header};

/// List catalog titles in file order
pub fn execute(cli: &Cli, engine: &EngineState) -> Result<()> {
    let records = engine.records();

    match cli.format {
        OutputFormat::Json => print_json(records)?,
        OutputFormat::Human => {
            for record in records {
                if cli.quiet {
                    println!("{}", record.title());
                } else {
                    println!("{}", record);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header("list", &format!("count={}", records.len()))
            );
            for (row, record) in records.iter().enumerate() {
                println!(
                    "B {} \"{}\" author=\"{}\" genre=\"{}\"",
                    row,
                    escape_quotes(record.title()),
                    escape_quotes(record.author()),
                    escape_quotes(record.genre())
                );
            }
        }
    }

    Ok(())
}
