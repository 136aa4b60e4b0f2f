use std::sync::Arc;

mod highlight;
mod markdown;
mod registry;

pub use highlight::SyntaxHighlighter;
pub use markdown::{create_comrak_options, render_markdown, MarkdownRenderer};
pub use registry::FilterRegistry;

use crate::toc::{inject_toc, TocOptions};
use crate::utils::error::{BookbindError, BoxResult};

/// Capability of turning chapter markup into HTML
pub trait Renderer: Send + Sync {
    fn render(&self, markup: &str) -> BoxResult<String>;
}

/// Capability of turning source code into highlighted HTML
pub trait Highlighter: Send + Sync {
    fn highlight(&self, code: &str, language: &str) -> String;
}

/// A registry with the stock filters: the markdown renderer (wired to
/// the syntect highlighter) under `markdown`, the highlighter under
/// `syntect`
pub fn default_registry() -> FilterRegistry {
    let mut registry = FilterRegistry::new();
    let highlighter = Arc::new(SyntaxHighlighter::new());

    registry
        .register_highlighter("syntect", highlighter.clone())
        .expect("empty registry");
    registry
        .register_renderer(
            "markdown",
            Arc::new(MarkdownRenderer::with_highlighter(highlighter)),
        )
        .expect("empty registry");

    registry
}

/// Run a chapter through its format renderer, then number the headings
/// and inject the table of contents
pub fn render_chapter(
    registry: &FilterRegistry,
    format: &str,
    markup: &str,
    options: &TocOptions,
) -> BoxResult<String> {
    let renderer = registry.renderer(format).ok_or_else(|| {
        BookbindError::Render(format!("No renderer registered for format '{}'", format))
    })?;

    let html = renderer.render(markup)?;
    inject_toc(&html, options)
}
