use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A CMS page document: a title plus an ordered list of content blocks.
///
/// The `content` array is the render order as authored — it must be
/// preserved exactly, never sorted or deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub status: PageStatus,
    /// Raw content blocks as stored. Resolved to typed blocks at render time
    /// so a single malformed block cannot fail page deserialization.
    #[serde(default)]
    pub content: Vec<Value>,
}

/// Sanity-style slug object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_page_document() {
        let page: Page = serde_json::from_value(json!({
            "_id": "page-home",
            "title": "Home",
            "slug": { "current": "home" },
            "status": "published",
            "content": [
                { "_type": "hero", "title": "Go solar" },
                { "_type": "faq", "items": [] },
            ],
        }))
        .unwrap();

        assert_eq!(page.status, PageStatus::Published);
        assert_eq!(page.content.len(), 2);
    }

    #[test]
    fn missing_content_defaults_to_empty() {
        let page: Page = serde_json::from_value(json!({
            "_id": "page-bare",
            "title": "Bare",
            "slug": { "current": "bare" },
        }))
        .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.status, PageStatus::Draft);
    }
}
