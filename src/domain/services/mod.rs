//! Domain Services
//!
//! - `EntrypointLookup` - manifest loading and per-request file deduplication
//! - `LookupRegistry` - build name to lookup mapping
//! - `TagRenderer` - attribute composition and rendered-file bookkeeping
//! - `preload` - `Link: rel=preload` header values

mod entrypoint_lookup;
mod lookup_registry;
pub mod preload;
mod tag_renderer;

pub use entrypoint_lookup::EntrypointLookup;
pub use lookup_registry::LookupRegistry;
pub use preload::{merge_link_header, preload_links};
pub use tag_renderer::{RenderedFiles, TagRenderer};
