//! Subcommand handlers for the `encore` binary.

pub mod entries;
pub mod render;
pub mod warmup;

use std::path::Path;

use anyhow::Result;

use encore_entrypoints::config::EncoreConfig;
use encore_entrypoints::presentation::output::print_config_warnings;

/// Load the config file and report its warnings.
pub fn load_config(path: &Path, json: bool) -> Result<EncoreConfig> {
    let (config, warnings) = EncoreConfig::load_with_warnings(path)?;
    print_config_warnings(&warnings, json)?;
    Ok(config)
}
