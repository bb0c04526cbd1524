//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILE;

/// Which tags `render` prints
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderKind {
    Js,
    Css,
    #[default]
    All,
}

/// Encore - Webpack Encore entrypoints for server-side templates
#[derive(Parser, Debug)]
#[command(name = "encore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse every build's entrypoints.json and dump it into the cache file
    WarmupCache,

    /// Print the HTML tags of an entry
    Render {
        /// Entry name (e.g. "app")
        entry: String,

        /// Build name (default build if omitted)
        #[arg(short, long)]
        build: Option<String>,

        /// Asset package used to resolve URLs
        #[arg(short, long)]
        package: Option<String>,

        /// Tags to render
        #[arg(short, long, value_enum, default_value_t = RenderKind::All)]
        kind: RenderKind,

        /// Also print the `Link` preload header
        #[arg(long)]
        preload: bool,
    },

    /// List the entries of a build
    Entries {
        /// Build name (default build if omitted)
        #[arg(short, long)]
        build: Option<String>,
    },
}
