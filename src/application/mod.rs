//! Application Layer
//!
//! Use cases that orchestrate the domain services for a host application:
//!
//! - `Encore` - the per-request surface (file lists, rendered tags, preload
//!   header, end-of-cycle reset)
//! - `warmup_cache` - parse every build's manifest once and dump it into the
//!   cache file read by `FileCache`

pub mod runtime;
pub mod warmup;

pub use runtime::Encore;
pub use warmup::{warmup_cache, WarmupReport, WARMUP_ENTRY};
