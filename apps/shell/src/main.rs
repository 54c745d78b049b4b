mod cli;
mod render;

use crate::cli::{Cli, Command, SearchArgs};
use anyhow::Context;
use clap::Parser;
use erbeds::availability::BedSource;
use erbeds::domain::config::{ClientConfig, LogConfig};
use erbeds::domain::labels::LOAD_FAILED;
use erbeds::kernel::config::load_config;
use erbeds::kernel::prelude::*;
use erbeds_logger::{LevelFilter, Logger};
use std::io::{self, IsTerminal};
use tracing::{debug, error};

#[erbeds_runtime::main(current_thread)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: ClientConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _logger = init_logger(&cfg.log)?;

    match cli.command {
        Some(Command::Regions) => {
            render::write_regions(&mut io::stdout().lock(), &RegionCatalog::builtin())?;
            Ok(())
        },
        None => search(&cfg, &cli.search).await,
    }
}

fn init_logger(log: &LogConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter =
        anyhow::Context::with_context(log.level.parse(), || format!("Invalid log level '{}'", log.level))?;
    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .ansi(io::stderr().is_terminal())
        .level(level);

    let logger = match &log.path {
        Some(path) if log.json => builder.path(path).json().init()?,
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };
    debug!(level = %level, file_output = logger.writes_file(), "Logger initialized");
    Ok(logger)
}

async fn search(cfg: &ClientConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let mut selection = SelectionState::new(RegionCatalog::builtin())?;
    if let Some(region) = &args.region {
        selection.set_top_level_region(region)?;
    }
    if let Some(district) = &args.district {
        selection.set_sub_region(district)?;
    }

    let client = erbeds::connect(cfg).context("Bed availability client is not configured")?;

    let mut results = ResultsState::default();
    results.begin_query();
    if let Err(err) = results.finish(client.fetch(selection.selection()).await) {
        error!(kind = err.label(), error = %err, "Bed availability query failed");
        return Err(err).context(LOAD_FAILED);
    }

    if args.sort {
        results.sort_by_beds_descending();
    }

    render::write_results(&mut io::stdout().lock(), selection.selection(), results.records())?;
    Ok(())
}
