//! Encore Entrypoints - Webpack Encore asset lookup for server-side templates
//!
//! Reads the `entrypoints.json` manifest written by Webpack Encore and turns
//! entry names into the JS/CSS files (and HTML tags) a page must include,
//! handing out each file at most once per request.
//!
//! ## Layers
//!
//! - `domain` - Manifest model, lookup and tag rendering services, ports
//! - `infrastructure` - Local file system, manifest caches, URL resolvers
//! - `application` - Request-cycle runtime and cache warm-up
//! - `presentation` - CLI definitions and service wiring
//! - `config` - `encore.toml` loading and validation

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{warmup_cache, Encore, WarmupReport};
pub use config::EncoreConfig;
pub use domain::entities::{Manifest, Tag};
pub use domain::services::{EntrypointLookup, LookupRegistry, TagRenderer};
pub use domain::value_objects::{AssetType, AttributeValue, Attributes, TagKind};
pub use error::{EncoreError, EncoreResult};
