use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ordered chapter manifests for every book built from one content pool.
///
/// Maps a book id (e.g. "cftbat") to the ordered sequence of chapter
/// slugs making up that book. Loaded once at startup and treated as
/// read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChapterManifest {
    #[serde(flatten)]
    books: HashMap<String, Vec<String>>,
}

impl ChapterManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manifest from an explicit book → slugs mapping
    pub fn from_books(books: HashMap<String, Vec<String>>) -> Self {
        ChapterManifest { books }
    }

    /// The ordered slug list for a book, if the book is known
    pub fn book(&self, book: &str) -> Option<&[String]> {
        self.books.get(book).map(|slugs| slugs.as_slice())
    }

    /// Position of a slug within a book's ordering
    pub fn position(&self, book: &str, slug: &str) -> Option<usize> {
        self.books
            .get(book)
            .and_then(|slugs| slugs.iter().position(|s| s == slug))
    }

    /// Iterate over the known book ids
    pub fn books(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(|k| k.as_str())
    }

    pub fn contains_book(&self, book: &str) -> bool {
        self.books.contains_key(book)
    }

    /// Number of books in the manifest
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
