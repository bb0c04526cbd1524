#![no_main]

use std::path::Path;

use encore_entrypoints::{AssetType, Manifest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing must never panic, only error
        if let Ok(manifest) = Manifest::from_json(content, Path::new("entrypoints.json")) {
            for name in manifest.entry_names() {
                let _ = manifest.files(&name, AssetType::Js);
                let _ = manifest.files(&name, AssetType::Css);
            }
        }
    }
});
