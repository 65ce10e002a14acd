use std::io;

use clap::{CommandFactory, Parser, crate_authors, crate_description, crate_version};
use clap_complete::generate;
use eyre::Result;
use tracing::{info, trace};

use quakectl::{
    Config, ListSubCommand, Opts, SubCommand, build_map, fetch_from_site, list_formats,
    show_legend,
};
use quakemap_common::{LogOpts, init_logging};
use quakemap_sources::Sources;

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    let level = match (opts.debug, opts.verbose) {
        (true, _) | (_, 2..) => Some("debug"),
        (_, 1) => Some("info"),
        _ => None,
    };
    let lopts = LogOpts {
        tree: opts.tree,
        file: opts.log_dir.clone(),
        level: level.map(String::from),
    };
    init_logging(NAME, &lopts)?;

    // Config only has the tile provider credentials.
    //
    let cfg = Config::load(opts.config.as_deref())?;

    // Banner
    //
    banner()?;

    let srcs = Sources::load(opts.sources.as_deref())?;

    handle_subcmd(&cfg, &srcs, &opts.subcmd).await
}

pub async fn handle_subcmd(cfg: &Config, srcs: &Sources, subcmd: &SubCommand) -> Result<()> {
    match subcmd {
        // Handle `map`
        //
        SubCommand::Map(mopts) => {
            trace!("map");

            build_map(cfg, srcs, mopts).await?;
        }

        // Handle `fetch site`
        //
        SubCommand::Fetch(fopts) => {
            trace!("fetch");

            fetch_from_site(srcs, fopts).await?;
        }

        // Standalone `legend` command
        //
        SubCommand::Legend => {
            println!("{}", show_legend());
        }

        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and vice-versa.  Not worth
        //       trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
        }

        // Standalone `list` command
        //
        SubCommand::List(lopts) => match lopts.cmd {
            ListSubCommand::Sources => {
                info!("Listing all sources:");

                eprintln!("{}", srcs.list());
            }
            ListSubCommand::Formats => {
                info!("Listing all formats:");

                eprintln!("{}", list_formats());
            }
        },

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("{}", version());
            eprintln!("Modules: ");
            eprintln!("\t{}", quakectl::version());
            eprintln!("\t{}", quakemap_common::version());
            eprintln!("\t{}", quakemap_formats::version());
            eprintln!("\t{}", quakemap_sources::version());
        }
    }
    Ok(())
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    ))
}
