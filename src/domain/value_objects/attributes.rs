//! HTML attribute set
//!
//! An insertion-ordered map of attribute name to value. Order is kept so
//! rendered tags are stable: the URL attribute comes first, then defaults
//! in configuration order, then `integrity`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Attribute value: a string, or a boolean flag.
///
/// `Flag(true)` renders as a bare attribute (`defer`), `Flag(false)` is
/// not rendered at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Text(String),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Flag(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Flag(b)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, AttributeValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set `name`, replacing an existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// String value of `name`, `None` for flags or missing attributes.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_str)
    }

    pub fn get_flag(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(AttributeValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.iter().any(|(n, _)| n == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        let pos = self.0.iter().position(|(n, _)| n == name)?;
        Some(self.0.remove(pos).1)
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
    }

    /// Add the keys of `defaults` that `self` does not set yet.
    pub fn with_defaults(mut self, defaults: &Attributes) -> Self {
        for (name, value) in defaults.iter() {
            if !self.contains_key(name) {
                self.0.push((name.to_string(), value.clone()));
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Serialize for Attributes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of attribute names to strings or booleans")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut attributes = Attributes::new();
                while let Some((name, value)) = access.next_entry::<String, AttributeValue>()? {
                    attributes.insert(name, value);
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}
