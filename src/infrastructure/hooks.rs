//! Ready-made tag attribute hooks

use crate::domain::ports::TagAttributeHook;
use crate::domain::value_objects::{Attributes, TagKind};

/// Adds a CSP `nonce` attribute to every rendered tag.
#[derive(Debug, Clone)]
pub struct NonceHook {
    nonce: String,
}

impl NonceHook {
    pub fn new(nonce: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
        }
    }
}

impl TagAttributeHook for NonceHook {
    fn modify(&self, _kind: TagKind, _url: &str, mut attributes: Attributes) -> Attributes {
        attributes.insert("nonce", self.nonce.clone());
        attributes
    }
}
