//! `Link: rel=preload` header values
//!
//! Rendered script and style URLs are advertised to the client as preload
//! hints, appended to whatever `Link` header the response already carries.

use crate::domain::value_objects::TagKind;

/// One header entry per URL, scripts first.
pub fn preload_links(scripts: &[String], styles: &[String], crossorigin: Option<&str>) -> Vec<String> {
    scripts
        .iter()
        .map(|url| link(url, TagKind::Script, crossorigin))
        .chain(
            styles
                .iter()
                .map(|url| link(url, TagKind::Link, crossorigin)),
        )
        .collect()
}

/// New `Link` header value, or `None` when there is nothing to add.
pub fn merge_link_header(existing: Option<&str>, links: &[String]) -> Option<String> {
    if links.is_empty() {
        return None;
    }

    let mut parts: Vec<&str> = existing
        .filter(|header| !header.is_empty())
        .map(|header| header.split(',').collect())
        .unwrap_or_default();
    parts.extend(links.iter().map(String::as_str));

    Some(parts.join(","))
}

fn link(url: &str, kind: TagKind, crossorigin: Option<&str>) -> String {
    let mut entry = format!("<{}>; rel=\"preload\"; as=\"{}\"", url, kind.preload_as());
    if let Some(crossorigin) = crossorigin {
        entry.push_str(&format!("; crossorigin=\"{}\"", crossorigin));
    }
    entry
}
