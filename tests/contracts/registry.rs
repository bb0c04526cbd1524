//! Lookup registry contracts
//!
//! Build names resolve to exactly one lookup; the default build is used
//! only when no name is passed.

use std::collections::BTreeMap;

use crate::common::*;

use encore_entrypoints::{EncoreError, EntrypointLookup, LookupRegistry};

fn registry(env: &TestEnv, default_build: Option<&str>) -> LookupRegistry {
    let mut lookups = BTreeMap::new();
    lookups.insert(
        "_default".to_string(),
        EntrypointLookup::new(env.project_path("public/build/entrypoints.json")),
    );
    lookups.insert(
        "admin".to_string(),
        EntrypointLookup::new(env.project_path("public/admin/entrypoints.json")),
    );
    LookupRegistry::new(lookups, default_build.map(str::to_string))
}

#[test]
fn contract_omitted_build_uses_default() {
    let env = TestEnv::builder()
        .with_manifest("public/build", SIMPLE_MANIFEST)
        .with_manifest("public/admin", ADMIN_BUILD_MANIFEST)
        .build();
    let mut registry = registry(&env, Some("_default"));

    assert_eq!(
        registry.get_mut(None).unwrap().javascript_files("app").unwrap(),
        vec!["/build/app.js"]
    );
    assert_eq!(
        registry
            .get_mut(Some("admin"))
            .unwrap()
            .javascript_files("dashboard")
            .unwrap(),
        vec!["/admin/dashboard.js"]
    );
}

#[test]
fn contract_no_default_configured() {
    let env = TestEnv::builder().build();
    let registry = registry(&env, None);

    let err = registry.get(None).unwrap_err();

    assert!(matches!(err, EncoreError::NoDefaultBuild));
}

#[test]
fn contract_unknown_build() {
    let env = TestEnv::builder().build();
    let registry = registry(&env, Some("_default"));

    let err = registry.get(Some("blog")).unwrap_err();

    assert!(matches!(err, EncoreError::UnknownBuild { ref name } if name == "blog"));
    assert_eq!(err.to_string(), "the build \"blog\" is not configured");
}

#[test]
fn contract_builds_track_returned_files_independently() {
    let env = TestEnv::builder()
        .with_manifest("public/build", SIMPLE_MANIFEST)
        .with_manifest("public/admin", SIMPLE_MANIFEST)
        .build();
    let mut registry = registry(&env, Some("_default"));

    registry.get_mut(None).unwrap().javascript_files("app").unwrap();

    assert_eq!(
        registry
            .get_mut(Some("admin"))
            .unwrap()
            .javascript_files("app")
            .unwrap(),
        vec!["/build/app.js"]
    );
}

#[test]
fn contract_reset_all_resets_every_build() {
    let env = TestEnv::builder()
        .with_manifest("public/build", SIMPLE_MANIFEST)
        .with_manifest("public/admin", ADMIN_BUILD_MANIFEST)
        .build();
    let mut registry = registry(&env, Some("_default"));
    registry.get_mut(None).unwrap().javascript_files("app").unwrap();
    registry
        .get_mut(Some("admin"))
        .unwrap()
        .javascript_files("dashboard")
        .unwrap();

    registry.reset_all();

    assert_eq!(registry.get_mut(None).unwrap().javascript_files("app").unwrap().len(), 1);
    assert_eq!(
        registry
            .get_mut(Some("admin"))
            .unwrap()
            .javascript_files("dashboard")
            .unwrap()
            .len(),
        1
    );
}
