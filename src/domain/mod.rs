//! Domain Layer
//!
//! The core of entrypoint lookup and tag rendering, free of direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Manifest data and rendered tags
//! - `value_objects/` - Attributes, asset/tag kinds, build names, config warnings
//! - `services/` - Entrypoint lookup, lookup registry, tag renderer, preload header
//! - `ports/` - Interface definitions for infrastructure (fs, cache, URLs, hooks)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Disk access goes through the `FileSystem` port
//! 2. **Explicit state** - Per-request bookkeeping is owned and reset by the caller
//! 3. **Ports & Adapters** - Caches, URL resolution and attribute hooks are injected

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
