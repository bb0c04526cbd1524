//! Runtime Factory
//!
//! Turns a validated [`EncoreConfig`] into wired services. This is the
//! dependency injection point for hosts and for the CLI.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::Encore;
use crate::config::EncoreConfig;
use crate::domain::ports::ManifestCache;
use crate::domain::services::{EntrypointLookup, LookupRegistry, TagRenderer};
use crate::domain::value_objects::cache_key;
use crate::infrastructure::{FileCache, PathPackages};

/// One lookup per configured build, sharing the warmed cache when enabled.
pub fn create_registry(config: &EncoreConfig) -> LookupRegistry {
    let cache: Option<Arc<dyn ManifestCache>> = if config.cache {
        Some(Arc::new(FileCache::new(&config.cache_file)))
    } else {
        None
    };

    let mut lookups = BTreeMap::new();
    for (name, manifest_path) in config.manifest_paths() {
        let mut lookup = EntrypointLookup::new(manifest_path).with_strict_mode(config.strict_mode);
        if let Some(cache) = &cache {
            lookup = lookup.with_cache(Arc::clone(cache), cache_key(&name));
        }
        lookups.insert(name, lookup);
    }

    LookupRegistry::new(lookups, config.default_build().map(str::to_string))
}

pub fn create_resolver(config: &EncoreConfig) -> PathPackages {
    config
        .assets
        .packages
        .iter()
        .fold(PathPackages::new(config.assets.base_path.clone()), |resolver, (name, prefix)| {
            resolver.with_package(name.clone(), prefix.clone())
        })
}

pub fn create_renderer(config: &EncoreConfig) -> TagRenderer {
    TagRenderer::new(create_registry(config), Box::new(create_resolver(config)))
        .with_default_attributes(config.default_attributes())
        .with_script_attributes(config.script_attributes.clone())
        .with_link_attributes(config.link_attributes.clone())
}

/// Per-request runtime with every dependency wired up.
pub fn create_runtime(config: &EncoreConfig) -> Encore {
    Encore::new(create_renderer(config), config.preload)
}
