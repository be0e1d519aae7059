//! Page document seed.
//!
//! The host engine owns the page document and its persistence; this crate
//! only supplies the empty starting shape a brand-new page begins from:
//! `{ "content": [], "root": { "properties": {} } }`. The types are
//! serde-derived because the document travels through the host's storage
//! as JSON; the content entries themselves are host-shaped and opaque here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::props::PropMap;

/// A page document as exchanged with the host engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    /// Top-level block instances, in page order. Host-shaped values.
    pub content: Vec<Value>,
    /// The page root.
    pub root: RootNode,
}

/// The page root's own property set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootNode {
    pub properties: PropMap,
}

impl PageDocument {
    /// The empty starting document for a brand-new page.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_shape() {
        let document = PageDocument::empty();
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value, json!({"content": [], "root": {"properties": {}}}));
    }

    #[test]
    fn test_round_trip() {
        let raw = r#"{"content":[{"type":"Heading","props":{"text":"hi"}}],"root":{"properties":{"title":"Home"}}}"#;
        let document: PageDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(document.content.len(), 1);
        assert_eq!(
            document.root.properties.get("title"),
            Some(&json!("Home"))
        );

        let back = serde_json::to_string(&document).unwrap();
        let reparsed: PageDocument = serde_json::from_str(&back).unwrap();
        assert_eq!(document, reparsed);
    }
}
