//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring configuration into runtime services
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Builds lookups, resolver and runtime from an [`EncoreConfig`]
//! - `output` - NDJSON event helpers
//!
//! ## Usage
//!
//! ```ignore
//! use encore_entrypoints::config::EncoreConfig;
//! use encore_entrypoints::presentation::factory;
//!
//! let config = EncoreConfig::load("encore.toml".as_ref())?;
//! let mut encore = factory::create_runtime(&config);
//! let html = encore.script_tags("app", None, None, &Default::default())?;
//! ```
//!
//! [`EncoreConfig`]: crate::config::EncoreConfig

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::create_runtime;
