use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Real-time ER bed availability by region.
#[derive(Debug, Parser)]
#[command(name = "erbeds", version, about)]
pub struct Cli {
    /// Config file; `erbeds.toml` in the working directory is used when present.
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the known regions and their districts.
    Regions,
}

#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Top-level region (시도), e.g. 광주광역시.
    #[arg(long, short)]
    pub region: Option<String>,

    /// District (시군구) of the region, e.g. 서구. Defaults to the region's first district.
    #[arg(long, short)]
    pub district: Option<String>,

    /// Order hospitals by available beds, most first.
    #[arg(long, short)]
    pub sort: bool,
}
