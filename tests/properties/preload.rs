//! Property tests for `Link` header merging.

use proptest::prelude::*;

use encore_entrypoints::domain::services::{merge_link_header, preload_links};

fn urls() -> impl Strategy<Value = Vec<String>> {
    let url = proptest::string::string_regex("/build/[a-z0-9]{1,8}\\.(js|css)").unwrap();
    proptest::collection::vec(url, 0..5)
}

proptest! {
    /// PROPERTY: one header entry per rendered URL, appended after the
    /// entries already on the response.
    #[test]
    fn property_merged_header_keeps_existing_entries_first(
        scripts in urls(),
        styles in urls(),
        existing in proptest::option::of(proptest::string::string_regex("</[a-z]{1,8}>; rel=\"preload\"").unwrap()),
    ) {
        let links = preload_links(&scripts, &styles, None);
        prop_assert_eq!(links.len(), scripts.len() + styles.len());

        match merge_link_header(existing.as_deref(), &links) {
            None => prop_assert!(links.is_empty()),
            Some(header) => {
                let parts: Vec<&str> = header.split(',').collect();
                let offset = usize::from(existing.is_some());
                prop_assert_eq!(parts.len(), links.len() + offset);
                if let Some(existing) = &existing {
                    prop_assert_eq!(parts[0], existing.as_str());
                }
                for (part, link) in parts[offset..].iter().zip(&links) {
                    prop_assert_eq!(*part, link.as_str());
                }
            }
        }
    }
}
