#![no_main]

use std::path::Path;

use encore_entrypoints::config::{EncoreConfig, RawConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and validation should never panic
        if let Ok(raw) = toml::from_str::<RawConfig>(content) {
            if let Ok(config) = EncoreConfig::from_raw(raw, Path::new("encore.toml")) {
                let _ = config.cache_keys();
                let _ = config.default_attributes();
            }
        }
    }
});
