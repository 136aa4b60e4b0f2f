use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref SLUG_REGEX: Regex = Regex::new(r"([^/]+)/?$").unwrap();
}

/// What a content item is within the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A book chapter
    Chapter,
    /// Standalone documentation page
    Documentation,
    /// Anything else (assets, index pages, ...)
    Page,
}

/// A content item as handed over by the site pipeline.
///
/// The pipeline owns these; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Path-like identifier, e.g. `/cftbat/getting-started/`
    pub identifier: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub draft: bool,
    /// Book this item belongs to, if any
    #[serde(default)]
    pub book: Option<String>,
}

impl ContentItem {
    /// The chapter slug: the final path segment of the identifier,
    /// trailing separator stripped
    pub fn slug(&self) -> Option<&str> {
        SLUG_REGEX
            .captures(&self.identifier)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(identifier: &str) -> ContentItem {
        ContentItem {
            identifier: identifier.to_string(),
            kind: ItemKind::Chapter,
            draft: false,
            book: None,
        }
    }

    #[test]
    fn test_slug_from_identifier() {
        assert_eq!(item("/cftbat/getting-started/").slug(), Some("getting-started"));
        assert_eq!(item("/cftbat/getting-started").slug(), Some("getting-started"));
        assert_eq!(item("getting-started").slug(), Some("getting-started"));
    }

    #[test]
    fn test_slug_missing() {
        assert_eq!(item("/").slug(), None);
        assert_eq!(item("").slug(), None);
    }
}
