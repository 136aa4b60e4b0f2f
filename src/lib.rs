//! Bookbind is the core of a multi-book static site generator: chapter
//! markup is rendered through named filters, headings are numbered and
//! collected into a table of contents, and chapters are ordered per book
//! by a configured manifest. File loading, routing and asset compilation
//! belong to the surrounding pipeline, not to this crate.

// Module declarations
pub mod chapters;
pub mod config;
pub mod filters;
pub mod toc;
pub mod utils;

pub use chapters::{ordered_chapters, ChapterOrderer, ContentItem, ItemKind};
pub use config::{load_manifest, manifest_from_str, ChapterManifest};
pub use filters::{default_registry, render_chapter, FilterRegistry, Highlighter, Renderer};
pub use toc::{index_headings, inject_toc, render_toc, Heading, TocOptions};
pub use utils::error::{BookbindError, BoxResult};
