//! Manifest cache contracts
//!
//! A warmed dump is trusted verbatim: production lookups never touch
//! `entrypoints.json` once the dump has the build.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::common::*;

use encore_entrypoints::domain::ports::ManifestCache;
use encore_entrypoints::infrastructure::{FileCache, MemoryCache};
use encore_entrypoints::{warmup_cache, EncoreError, EntrypointLookup};

fn keys(env: &TestEnv) -> BTreeMap<String, std::path::PathBuf> {
    let mut keys = BTreeMap::new();
    keys.insert(
        "_default".to_string(),
        env.project_path("public/build/entrypoints.json"),
    );
    keys.insert(
        "admin".to_string(),
        env.project_path("public/admin/entrypoints.json"),
    );
    keys
}

#[test]
fn contract_cache_hit_is_trusted_over_current_file() {
    let env = TestEnv::builder()
        .with_manifest("public/build", SIMPLE_MANIFEST)
        .build();
    let cache_file = env.project_path("var/cache/encore.cache.json");
    warmup_cache(&keys(&env), &cache_file).unwrap();

    env.write(
        "public/build/entrypoints.json",
        r#"{"entrypoints": {"other": {"js": ["/build/other.js"]}}}"#,
    );
    let mut lookup = EntrypointLookup::new(env.project_path("public/build/entrypoints.json"))
        .with_cache(Arc::new(FileCache::new(&cache_file)), "_default");

    assert_eq!(lookup.javascript_files("app").unwrap(), vec!["/build/app.js"]);
    assert!(!lookup.entry_exists("other").unwrap());
}

#[test]
fn contract_cache_hit_skips_missing_manifest_file() {
    let env = TestEnv::builder()
        .with_manifest("public/build", SIMPLE_MANIFEST)
        .build();
    let cache_file = env.project_path("var/cache/encore.cache.json");
    warmup_cache(&keys(&env), &cache_file).unwrap();
    env.remove("public/build/entrypoints.json");

    let mut lookup = EntrypointLookup::new(env.project_path("public/build/entrypoints.json"))
        .with_cache(Arc::new(FileCache::new(&cache_file)), "_default");

    assert_eq!(lookup.css_files("app").unwrap(), vec!["/build/app.css"]);
}

#[test]
fn contract_parsed_manifest_is_stored_under_cache_key() {
    let env = TestEnv::builder()
        .with_manifest("public/build", SIMPLE_MANIFEST)
        .build();
    let cache = Arc::new(MemoryCache::new());
    let mut lookup = EntrypointLookup::new(env.project_path("public/build/entrypoints.json"))
        .with_cache(cache.clone(), "_default");

    lookup.javascript_files("app").unwrap();

    let stored = cache.get("_default").unwrap().unwrap();
    assert!(stored.contains_entry("app"));
}

#[test]
fn contract_warmup_skips_missing_builds() {
    let env = TestEnv::builder()
        .with_manifest("public/admin", ADMIN_BUILD_MANIFEST)
        .build();
    let cache_file = env.project_path("var/cache/encore.cache.json");

    let report = warmup_cache(&keys(&env), &cache_file).unwrap();

    assert_eq!(report.dumped, vec!["admin"]);
    assert_eq!(report.skipped, vec!["_default"]);
    let dump = FileCache::new(&cache_file);
    assert!(dump.get("_default").unwrap().is_none());
    assert!(dump.get("admin").unwrap().unwrap().contains_entry("dashboard"));
}

#[test]
fn contract_warmup_fails_on_malformed_manifest() {
    let env = TestEnv::builder()
        .with_manifest("public/build", "not json")
        .build();

    let err = warmup_cache(&keys(&env), &env.project_path("cache.json")).unwrap_err();

    assert!(matches!(err, EncoreError::ManifestMalformed { .. }));
}

#[test]
fn contract_corrupted_dump_is_reported() {
    let env = TestEnv::builder()
        .with_file("var/cache/encore.cache.json", "{ definitely not a dump")
        .build();

    let cache = FileCache::new(env.project_path("var/cache/encore.cache.json"));
    let err = cache.get("_default").unwrap_err();

    assert!(err.to_string().contains("encore warmup-cache"));
}
