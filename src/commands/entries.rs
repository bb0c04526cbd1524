use std::path::Path;

use anyhow::Result;

use encore_entrypoints::presentation::factory::create_registry;
use encore_entrypoints::presentation::output::emit;

use super::load_config;

pub fn cmd_entries(config_path: &Path, build: Option<&str>, json: bool) -> Result<()> {
    let config = load_config(config_path, json)?;
    let mut registry = create_registry(&config);
    let lookup = registry.get_mut(build)?;
    let entries = lookup.entry_names()?;

    if json {
        emit(serde_json::json!({
            "event": "entries",
            "build": build,
            "manifest": lookup.manifest_path().display().to_string(),
            "entries": entries,
        }))?;
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry);
    }
    Ok(())
}
