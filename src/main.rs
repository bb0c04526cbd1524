//! Encore CLI - Webpack Encore entrypoints tooling
//!
//! Usage: encore [--config encore.toml] <COMMAND>
//!
//! Commands:
//!   warmup-cache  Dump every build's entrypoints.json into the cache file
//!   render        Print the HTML tags of an entry
//!   entries       List the entries of a build

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use encore_entrypoints::presentation::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::WarmupCache => commands::warmup::cmd_warmup_cache(&cli.config, cli.json),
        Commands::Render {
            entry,
            build,
            package,
            kind,
            preload,
        } => commands::render::cmd_render(
            &cli.config,
            commands::render::RenderArgs {
                entry: &entry,
                build: build.as_deref(),
                package: package.as_deref(),
                kind,
                preload,
            },
            cli.json,
        ),
        Commands::Entries { build } => {
            commands::entries::cmd_entries(&cli.config, build.as_deref(), cli.json)
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
