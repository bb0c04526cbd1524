//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod attributes;
mod build_name;
mod config_warning;
mod kind;

pub use attributes::{AttributeValue, Attributes};
pub use build_name::{cache_key, DEFAULT_BUILD, ENTRYPOINTS_FILENAME};
pub use config_warning::ConfigWarning;
pub use kind::{AssetType, TagKind};
