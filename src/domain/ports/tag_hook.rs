//! TagAttributeHook port
//!
//! Runs on every tag before it is finalized. A hook receives the tag kind,
//! the resolved URL and the merged attributes and returns the attributes to
//! render, e.g. to inject a CSP nonce or drop an attribute.

use crate::domain::value_objects::{Attributes, TagKind};

pub trait TagAttributeHook: Send + Sync {
    fn modify(&self, kind: TagKind, url: &str, attributes: Attributes) -> Attributes;
}

impl<F> TagAttributeHook for F
where
    F: Fn(TagKind, &str, Attributes) -> Attributes + Send + Sync,
{
    fn modify(&self, kind: TagKind, url: &str, attributes: Attributes) -> Attributes {
        self(kind, url, attributes)
    }
}
