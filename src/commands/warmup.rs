use std::path::Path;

use anyhow::Result;

use encore_entrypoints::application::warmup_cache;
use encore_entrypoints::presentation::output::emit;

use super::load_config;

pub fn cmd_warmup_cache(config_path: &Path, json: bool) -> Result<()> {
    let config = load_config(config_path, json)?;
    let report = warmup_cache(&config.cache_keys(), &config.cache_file)?;

    if json {
        emit(serde_json::json!({
            "event": "warmup",
            "status": "success",
            "cache_file": report.cache_file.display().to_string(),
            "dumped": report.dumped,
            "skipped": report.skipped,
        }))?;
        return Ok(());
    }

    for key in &report.skipped {
        eprintln!("skipped build \"{}\": entrypoints.json not found", key);
    }
    println!(
        "Entrypoints successfully dumped into \"{}\".",
        report.cache_file.display()
    );
    Ok(())
}
