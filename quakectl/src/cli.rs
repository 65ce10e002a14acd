//! Module describing all possible commands and sub-commands to the `quakectl` main driver
//!
//! We have three main commands:
//!
//! - `map`
//! - `fetch`
//! - `list`
//!
//! `map` fetches both the earthquakes and the plate boundaries, transforms them into
//! annotations and writes a standalone HTML page (or its JSON description).
//!
//! `fetch` retrieve the raw data of one site and dumps it into a file or `stdout`.
//!
//! `legend` displays the depth color scale, `completion` is here just to configure the
//! various shells completion system.
//!

use std::path::PathBuf;

use clap::{
    Parser, Subcommand, ValueEnum, crate_authors, crate_description, crate_name, crate_version,
};
use clap_complete::shells::Shell;

use quakemap_sources::{Level, Period};

use crate::Output;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Sites definition file (default is the builtin one).
    #[clap(short = 'S', long)]
    pub sources: Option<PathBuf>,
    /// debug mode.
    #[clap(short = 'D', long = "debug")]
    pub debug: bool,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Hierarchical traces.
    #[clap(long)]
    pub tree: bool,
    /// Also write traces in this directory.
    #[clap(long)]
    pub log_dir: Option<PathBuf>,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `fetch [-o FILE] site`
/// `legend`
/// `list sources|formats`
/// `map [-o FILE] [-F html|json]`
/// `version`
///
#[derive(Debug, Subcommand)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Fetch raw data from specified site
    Fetch(FetchOpts),
    /// Display the depth legend
    Legend,
    /// List sources or formats
    List(ListOpts),
    /// Build the map
    Map(MapOpts),
    /// List all module versions
    Version,
}

// ------

/// Which USGS feed we want
///
#[derive(Clone, Debug, Parser)]
pub struct FeedOpts {
    /// Minimum magnitude.
    #[clap(short = 'L', long, value_enum, default_value_t = Level::All)]
    pub level: Level,
    /// Time span, ending now.
    #[clap(short = 'P', long, value_enum, default_value_t = Period::Week)]
    pub period: Period,
    /// Timeout for each fetch, in seconds.
    #[clap(short = 'T', long, default_value_t = 30)]
    pub timeout: u64,
}

/// Options for building the map.
///
#[derive(Debug, Parser)]
pub struct MapOpts {
    /// Access token for the tile provider.
    #[clap(long, env = "MAPBOX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Output format.
    #[clap(short = 'F', long, value_enum, default_value_t = Output::Html)]
    pub format: Output,
    /// Output file.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Site with earthquakes.
    #[clap(long, default_value = "quakes")]
    pub quakes: String,
    /// Site with plate boundaries.
    #[clap(long, default_value = "plates")]
    pub plates: String,
    /// Display times in UTC instead of the local time zone.
    #[clap(long)]
    pub utc: bool,
    #[clap(flatten)]
    pub feed: FeedOpts,
}

// ------

/// Options for fetching raw data with an optional output file.
///
#[derive(Debug, Parser)]
pub struct FetchOpts {
    /// Output file.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    #[clap(flatten)]
    pub feed: FeedOpts,
    /// site name
    pub site: String,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// All  list` sub-commands:
///
/// `list formats`
/// `list sources`
///
#[derive(Debug, Parser)]
pub struct ListOpts {
    #[clap(value_parser)]
    pub cmd: ListSubCommand,
}

/// These are the sub-commands for `list
///
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, ValueEnum)]
pub enum ListSubCommand {
    /// List all input formats
    Formats,
    /// List all sources from `sources.hcl`
    Sources,
}
