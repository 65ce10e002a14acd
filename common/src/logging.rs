//! Common logging initializer
//!
//! Everything goes through `tracing`, filters are taken from `RUST_LOG`.
//!

use std::path::PathBuf;

use eyre::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_tree::HierarchicalLayer;

/// Used when neither `RUST_LOG` nor an explicit level is given.  Skipped features are
/// reported at this level.
pub const DEF_LEVEL: &str = "warn";

/// How do we want our traces?
///
#[derive(Clone, Debug, Default)]
pub struct LogOpts {
    /// Hierarchical output instead of the compact one
    pub tree: bool,
    /// Also log into an hourly rolling file in that directory
    pub file: Option<PathBuf>,
    /// Default level when `RUST_LOG` is not set
    pub level: Option<String>,
}

#[tracing::instrument]
pub fn init_logging(name: &'static str, opts: &LogOpts) -> Result<()> {
    // Load filters from environment, fallback on the given level
    //
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = make_filter(env.as_deref(), opts.level.as_deref())?;

    // Do we want hierarchical output?
    //
    let (tree, fmt) = if opts.tree {
        let tree = HierarchicalLayer::new(2)
            .with_ansi(true)
            .with_span_retrace(true)
            .with_span_modes(true)
            .with_targets(true)
            .with_verbose_entry(true)
            .with_verbose_exit(true)
            .with_bracketed_fields(true);
        (Some(tree), None)
    } else {
        let fmt = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();
        (None, Some(fmt))
    };

    // Log to file?
    //
    let file = opts.file.as_ref().map(|dir| {
        // Basic append-only rolling file for all traces.
        //
        let file_appender = tracing_appender::rolling::hourly(dir, name);
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender)
    });

    // Combine filters & exporters
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(fmt)
        .with(file)
        .try_init()?;

    Ok(())
}

/// `RUST_LOG` wins if it parses, then `level`, then `DEF_LEVEL`.
///
pub fn make_filter(env: Option<&str>, level: Option<&str>) -> Result<EnvFilter> {
    let from_env = env
        .filter(|e| !e.trim().is_empty())
        .and_then(|e| EnvFilter::try_new(e).ok());
    if let Some(filter) = from_env {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(level.unwrap_or(DEF_LEVEL))?)
}
