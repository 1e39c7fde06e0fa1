//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use bookmatch_core::catalog::{load_csv, LoadOptions};
use bookmatch_core::error::Result;
use bookmatch_core::{bail_invalid, bail_usage, EngineConfig, EngineState, RecommendOptions};

/// Resolve the effective configuration: discovered file plus flag overrides
pub fn resolve_config(cli: &Cli, cwd: &Path) -> Result<EngineConfig> {
    let explicit = cli.config.as_ref().map(|path| absolutize(cwd, path));
    let (mut config, source) = EngineConfig::discover(explicit.as_deref(), cwd)?;
    debug!(source = ?source, "config");

    if let Some(language) = cli.language {
        config.language = language;
    }
    if cli.stemming {
        config.stemming = true;
    } else if cli.no_stemming {
        config.stemming = false;
    }
    config.validate()?;
    Ok(config)
}

/// Load the catalog named by `--catalog` and build an engine over it
pub fn build_engine(
    cli: &Cli,
    cwd: &Path,
    config: &EngineConfig,
    start: Instant,
) -> Result<EngineState> {
    let Some(catalog_path) = &cli.catalog else {
        bail_usage!("no catalog given: pass --catalog <csv> or set BOOKMATCH_CATALOG");
    };
    let catalog_path = absolutize(cwd, catalog_path);

    let catalog = load_csv(
        &catalog_path,
        &LoadOptions {
            allow_duplicates: cli.allow_duplicates,
        },
    )?;
    debug!(records = catalog.len(), elapsed = ?start.elapsed(), "load_catalog");

    let engine = EngineState::build(catalog, config)?;
    debug!(elapsed = ?start.elapsed(), "build_engine");
    Ok(engine)
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Recommendation options for a requested count and score threshold
///
/// A missing count falls back to `default_limit`; an explicit one must lie in
/// `1..=max_limit`.
pub fn recommend_options(
    config: &EngineConfig,
    limit: Option<usize>,
    min_score: Option<f64>,
) -> Result<RecommendOptions> {
    let limit = match limit {
        None => config.default_limit,
        Some(n) if (1..=config.max_limit).contains(&n) => n,
        Some(n) => bail_invalid!(
            "limit",
            format!("{} (expected 1 to {})", n, config.max_limit)
        ),
    };
    Ok(RecommendOptions::new(limit).with_min_score(min_score.unwrap_or(config.min_score)))
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a PathBuf, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    pub fn config(&self) -> Result<EngineConfig> {
        resolve_config(self.cli, self.cwd)
    }

    pub fn build_engine(&self, config: &EngineConfig) -> Result<EngineState> {
        build_engine(self.cli, self.cwd, config, self.start)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("bookmatch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Content-based book recommendations from a CSV catalog.");
        println!();
        println!("Run `bookmatch --help` for usage information.");
        Ok(())
    }
}
