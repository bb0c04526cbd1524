//! Rendered HTML tags

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{AttributeValue, Attributes, TagKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub kind: TagKind,
    pub attributes: Attributes,
}

impl Tag {
    pub fn new(kind: TagKind, attributes: Attributes) -> Self {
        Self { kind, attributes }
    }

    /// Asset URL (`src` for scripts, `href` for links).
    pub fn url(&self) -> Option<&str> {
        self.attributes.get_str(self.kind.url_attribute())
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.kind.as_str());
        for (name, value) in self.attributes.iter() {
            match value {
                AttributeValue::Flag(true) => {
                    html.push(' ');
                    html.push_str(name);
                }
                AttributeValue::Flag(false) => {}
                AttributeValue::Text(text) => {
                    html.push_str(&format!(" {}=\"{}\"", name, escape_attribute(text)));
                }
            }
        }
        html.push('>');
        if self.kind == TagKind::Script {
            html.push_str("</script>");
        }
        html
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Render tags one per line.
pub fn render_html(tags: &[Tag]) -> String {
    tags.iter()
        .map(Tag::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
