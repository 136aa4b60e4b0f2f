mod loader;
mod types;

pub mod defaults;

pub use loader::{load_manifest, manifest_from_str, validate_manifest};
pub use types::ChapterManifest;
