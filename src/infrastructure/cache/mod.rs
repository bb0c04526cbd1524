//! Manifest cache implementations
//!
//! - `MemoryCache` - process-local map, used to collect manifests during warm-up
//! - `FileCache` - read-only JSON dump written by `encore warmup-cache`

mod file;
mod memory;

pub use file::{CacheDump, FileCache, CACHE_DUMP_VERSION};
pub use memory::MemoryCache;
