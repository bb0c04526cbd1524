//! Property tests for per-cycle file deduplication.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use encore_entrypoints::{AssetType, EntrypointLookup};

type Entries = BTreeMap<String, (Vec<String>, Vec<String>)>;

fn file_list(ext: &'static str) -> impl Strategy<Value = Vec<String>> {
    // Small pool so entries share chunks.
    proptest::collection::vec(0u8..8, 0..5).prop_map(move |ids| {
        let mut seen = BTreeSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .map(|id| format!("/build/chunk{}.{}", id, ext))
            .collect()
    })
}

fn entries() -> impl Strategy<Value = Entries> {
    let name = proptest::string::string_regex("[a-z]{1,6}").unwrap();
    proptest::collection::btree_map(name, (file_list("js"), file_list("css")), 1..5)
}

fn calls(entry_count: usize) -> impl Strategy<Value = Vec<(usize, bool)>> {
    proptest::collection::vec((0..entry_count, any::<bool>()), 1..12)
}

fn manifest_json(entries: &Entries) -> String {
    let entrypoints: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(name, (js, css))| (name.clone(), serde_json::json!({"js": js, "css": css})))
        .collect();
    serde_json::json!({ "entrypoints": entrypoints }).to_string()
}

fn scenario() -> impl Strategy<Value = (Entries, Vec<(usize, bool)>)> {
    entries().prop_flat_map(|entries| {
        let len = entries.len();
        (Just(entries), calls(len))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: each call returns the manifest list minus files already
    /// returned this cycle, in manifest order.
    #[test]
    fn property_files_are_manifest_minus_returned((entries, calls) in scenario()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entrypoints.json");
        std::fs::write(&path, manifest_json(&entries)).unwrap();
        let mut lookup = EntrypointLookup::new(&path);
        let names: Vec<&String> = entries.keys().collect();

        let mut returned: BTreeSet<String> = BTreeSet::new();
        for (index, is_js) in calls {
            let name = names[index];
            let (js, css) = &entries[name];
            let (asset_type, listed) = if is_js { (AssetType::Js, js) } else { (AssetType::Css, css) };

            let expected: Vec<String> = listed
                .iter()
                .filter(|file| !returned.contains(*file))
                .cloned()
                .collect();
            let got = lookup.files(name, asset_type).unwrap();

            prop_assert_eq!(&got, &expected);
            returned.extend(got);
        }
    }

    /// PROPERTY: after `reset()` the first call returns the full list again.
    #[test]
    fn property_reset_restores_full_lists((entries, calls) in scenario()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entrypoints.json");
        std::fs::write(&path, manifest_json(&entries)).unwrap();
        let mut lookup = EntrypointLookup::new(&path);
        let names: Vec<&String> = entries.keys().collect();

        for (index, is_js) in &calls {
            let asset_type = if *is_js { AssetType::Js } else { AssetType::Css };
            lookup.files(names[*index], asset_type).unwrap();
        }
        lookup.reset();

        let (index, _) = calls[0];
        let name = names[index];
        prop_assert_eq!(&lookup.javascript_files(name).unwrap(), &entries[name].0);
    }

    /// PROPERTY: `entry_exists` is independent of strict mode and of the
    /// files returned so far.
    #[test]
    fn property_entry_exists_matches_manifest_keys(
        entries in entries(),
        candidate in proptest::string::string_regex("[a-z]{1,6}").unwrap(),
        strict in any::<bool>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entrypoints.json");
        std::fs::write(&path, manifest_json(&entries)).unwrap();
        let mut lookup = EntrypointLookup::new(&path).with_strict_mode(strict);

        for name in entries.keys() {
            lookup.javascript_files(name).unwrap();
        }

        prop_assert_eq!(lookup.entry_exists(&candidate).unwrap(), entries.contains_key(&candidate));
    }
}
