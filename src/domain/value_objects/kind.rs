//! Asset and tag kinds

use std::fmt;

use serde::{Deserialize, Serialize};

/// File list of an entry point inside the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Js,
    Css,
}

impl AssetType {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Js => "js",
            AssetType::Css => "css",
        }
    }

    /// The HTML tag used to include files of this type.
    pub fn tag_kind(self) -> TagKind {
        match self {
            AssetType::Js => TagKind::Script,
            AssetType::Css => TagKind::Link,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of rendered tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Script,
    Link,
}

impl TagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Script => "script",
            TagKind::Link => "link",
        }
    }

    /// Attribute carrying the asset URL.
    pub fn url_attribute(self) -> &'static str {
        match self {
            TagKind::Script => "src",
            TagKind::Link => "href",
        }
    }

    /// `as` value of a `Link: rel=preload` header entry.
    pub fn preload_as(self) -> &'static str {
        match self {
            TagKind::Script => "script",
            TagKind::Link => "style",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
