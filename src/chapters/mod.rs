mod order;
mod types;

pub use order::{ordered_chapters, ChapterOrderer};
pub use types::{ContentItem, ItemKind};
