//! Configuration module
//!
//! Configuration hierarchy:
//! 1. Environment variables (ENCORE_*)
//! 2. Config file (`encore.toml`)
//! 3. Built-in defaults
//!
//! Raw values are validated once into [`EncoreConfig`]; everything
//! downstream works with the validated struct.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{with_env_overrides, DEFAULT_CONFIG_FILE};
pub use types::{AssetsConfig, CrossOrigin, CrossOriginSetting, EncoreConfig, RawConfig};
