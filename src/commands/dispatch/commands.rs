//! Command implementations for all bookmatch commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{recommend_options, Command, CommandContext};
use crate::commands::{info, interactive, list, recommend, similarity, terms};
use bookmatch_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;
        let config = ctx.config()?;

        match self {
            Commands::Recommend {
                title,
                limit,
                min_score,
            } => {
                // Bad counts are rejected before paying for a build
                let options = recommend_options(&config, *limit, *min_score)?;
                let engine = ctx.build_engine(&config)?;
                recommend::execute(cli, &engine, title, &options)
            }
            Commands::Interactive { limit } => {
                let options = recommend_options(&config, *limit, None)?;
                let engine = ctx.build_engine(&config)?;
                interactive::execute(cli, &engine, &options)
            }
            Commands::List => list::execute(cli, &ctx.build_engine(&config)?),
            Commands::Similarity { first, second } => {
                similarity::execute(cli, &ctx.build_engine(&config)?, first, second)
            }
            Commands::Terms { title, limit } => {
                terms::execute(cli, &ctx.build_engine(&config)?, title, *limit)
            }
            Commands::Info => info::execute(
                cli,
                &ctx.build_engine(&config)?,
                cli.catalog.as_deref(),
            ),
        }
    }
}
