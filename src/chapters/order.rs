use std::collections::{HashMap, HashSet};

use log::debug;

use crate::chapters::types::{ContentItem, ItemKind};
use crate::config::ChapterManifest;
use crate::utils::error::{BookbindError, BoxResult};

/// Select the real chapters of `book` and order them by the book's
/// manifest.
///
/// Drafts, other kinds and other books are filtered out. Every surviving
/// chapter must appear in the manifest; an unlisted slug fails the build
/// rather than silently vanishing from navigation, and two chapters
/// resolving to one slug is an authoring error surfaced the same way.
pub fn ordered_chapters(
    items: &[ContentItem],
    book: &str,
    manifest: &ChapterManifest,
) -> BoxResult<Vec<ContentItem>> {
    if !manifest.contains_book(book) {
        return Err(Box::new(BookbindError::UnknownBook {
            book: book.to_string(),
        }));
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut selected: Vec<(usize, ContentItem)> = Vec::new();

    for item in items {
        if item.kind != ItemKind::Chapter || item.draft {
            continue;
        }
        if item.book.as_deref() != Some(book) {
            continue;
        }

        let slug = item.slug().ok_or_else(|| {
            BookbindError::Generic(format!(
                "Item '{}' has no chapter segment in its identifier",
                item.identifier
            ))
        })?;

        if !seen.insert(slug.to_string()) {
            return Err(Box::new(BookbindError::DuplicateChapter {
                book: book.to_string(),
                slug: slug.to_string(),
            }));
        }

        let position = manifest.position(book, slug).ok_or_else(|| {
            BookbindError::UnknownChapter {
                book: book.to_string(),
                slug: slug.to_string(),
            }
        })?;

        selected.push((position, item.clone()));
    }

    selected.sort_by_key(|(position, _)| *position);

    debug!("Ordered {} chapter(s) for book '{}'", selected.len(), book);
    Ok(selected.into_iter().map(|(_, item)| item).collect())
}

/// Manifest-driven chapter ordering with a per-build memo.
///
/// One orderer is scoped to a single build pass: item sets and draft
/// flags can change between builds, so a fresh pass constructs a fresh
/// orderer instead of reusing this one.
pub struct ChapterOrderer {
    manifest: ChapterManifest,
    cache: HashMap<String, Vec<ContentItem>>,
}

impl ChapterOrderer {
    pub fn new(manifest: ChapterManifest) -> Self {
        ChapterOrderer {
            manifest,
            cache: HashMap::new(),
        }
    }

    pub fn manifest(&self) -> &ChapterManifest {
        &self.manifest
    }

    /// The ordered chapters of `book`, computed once per orderer
    pub fn chapters(&mut self, items: &[ContentItem], book: &str) -> BoxResult<Vec<ContentItem>> {
        if let Some(cached) = self.cache.get(book) {
            return Ok(cached.clone());
        }

        let ordered = ordered_chapters(items, book, &self.manifest)?;
        self.cache.insert(book.to_string(), ordered.clone());
        Ok(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn manifest() -> ChapterManifest {
        let mut books = HashMap::new();
        books.insert(
            "cftbat".to_string(),
            vec!["intro".to_string(), "setup".to_string(), "done".to_string()],
        );
        ChapterManifest::from_books(books)
    }

    fn chapter(slug: &str, book: &str, draft: bool) -> ContentItem {
        ContentItem {
            identifier: format!("/{}/{}/", book, slug),
            kind: ItemKind::Chapter,
            draft,
            book: Some(book.to_string()),
        }
    }

    #[test]
    fn test_manifest_order_excluding_drafts() {
        let items = vec![
            chapter("done", "cftbat", false),
            chapter("setup", "cftbat", true),
            chapter("intro", "cftbat", false),
        ];
        let ordered = ordered_chapters(&items, "cftbat", &manifest()).unwrap();

        let slugs: Vec<&str> = ordered.iter().filter_map(|i| i.slug()).collect();
        assert_eq!(slugs, vec!["intro", "done"]);
    }

    #[test]
    fn test_other_books_and_kinds_filtered_out() {
        let mut doc = chapter("intro", "cftbat", false);
        doc.kind = ItemKind::Documentation;
        let mut bookless = chapter("setup", "cftbat", false);
        bookless.book = None;
        let items = vec![
            doc,
            bookless,
            chapter("done", "cftbat", false),
            chapter("intro", "deploy", false),
        ];
        let ordered = ordered_chapters(&items, "cftbat", &manifest()).unwrap();

        let slugs: Vec<&str> = ordered.iter().filter_map(|i| i.slug()).collect();
        assert_eq!(slugs, vec!["done"]);
    }

    #[test]
    fn test_unknown_chapter_fails() {
        let items = vec![chapter("ghost", "cftbat", false)];
        let err = ordered_chapters(&items, "cftbat", &manifest()).unwrap_err();

        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_unknown_book_fails() {
        let err = ordered_chapters(&[], "nope", &manifest()).unwrap_err();

        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_duplicate_slug_fails() {
        let items = vec![
            chapter("intro", "cftbat", false),
            chapter("intro", "cftbat", false),
        ];
        let err = ordered_chapters(&items, "cftbat", &manifest()).unwrap_err();

        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_orderer_memoizes_per_book() {
        let items = vec![
            chapter("done", "cftbat", false),
            chapter("intro", "cftbat", false),
        ];
        let mut orderer = ChapterOrderer::new(manifest());

        let first = orderer.chapters(&items, "cftbat").unwrap();
        // The memo answers the second call even with a changed item set
        let second = orderer.chapters(&[], "cftbat").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
