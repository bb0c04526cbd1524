//! Domain Entities
//!
//! - `Manifest` - Parsed `entrypoints.json`
//! - `Tag` - A rendered `<script>` or `<link>` tag

mod manifest;
mod tag;

pub use manifest::{EntryFiles, Manifest};
pub use tag::{render_html, Tag};
