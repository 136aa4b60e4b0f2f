mod indexer;
mod renderer;
mod selector;

pub use indexer::{index_headings, to_anchor, Heading};
pub use renderer::render_toc;

use crate::utils::error::BoxResult;

/// Options for table of contents injection
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Selector for the element whose headings are indexed
    pub content_selector: String,
    /// Selector for the element the rendered TOC is appended to
    pub toc_selector: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions {
            content_selector: ".content".to_string(),
            toc_selector: "#toc.nav li.active-section".to_string(),
        }
    }
}

/// Number the headings of the content region and append the resulting
/// outline as a nested list inside the TOC anchor element
pub fn inject_toc(html: &str, options: &TocOptions) -> BoxResult<String> {
    let (indexed, outline) = index_headings(html, &options.content_selector)?;
    render_toc(&indexed, &outline, &options.toc_selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_toc_end_to_end() {
        let html = concat!(
            "<ol id=\"toc\" class=\"nav\"><li class=\"active-section\">Here</li></ol>",
            "<div class=\"content\"><h2>Intro</h2><h3>Why</h3></div>"
        );
        let output = inject_toc(html, &TocOptions::default()).unwrap();

        assert!(output.contains("<h2 id=\"1_Intro\">1. Intro</h2>"));
        assert!(output.contains("<h3 id=\"1_1_Why\">1.1. Why</h3>"));
        assert!(output.contains(concat!(
            "Here<ol><li><a href=\"#1_Intro\">1. Intro</a>",
            "<ol><li><a href=\"#1_1_Why\">1.1. Why</a></li></ol></li></ol></li>"
        )));
    }

    #[test]
    fn test_inject_toc_without_anchor_still_numbers() {
        let html = "<div class=\"content\"><h2>Intro</h2></div>";
        let output = inject_toc(html, &TocOptions::default()).unwrap();

        assert!(output.contains("1. Intro"));
        assert!(!output.contains("<ol>"));
    }
}
