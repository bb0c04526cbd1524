//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `cache/` - Manifest caches (in-memory, warmed JSON dump)
//! - `resolver` - Asset URL resolvers
//! - `hooks` - Ready-made tag attribute hooks

pub mod cache;
pub mod fs;
pub mod hooks;
pub mod resolver;

// Re-export for convenience
pub use cache::{CacheDump, FileCache, MemoryCache};
pub use fs::LocalFs;
pub use hooks::NonceHook;
pub use resolver::{IdentityResolver, PathPackages};
