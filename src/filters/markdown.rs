use std::sync::Arc;

use comrak::Options;
use lazy_static::lazy_static;
use regex::Regex;

use crate::filters::{Highlighter, Renderer};
use crate::utils::error::BoxResult;

lazy_static! {
    static ref CODE_BLOCK_REGEX: Regex =
        Regex::new(r#"(?s)<pre><code(?: class="language-([^"]+)")?>(.*?)</code></pre>"#).unwrap();
}

/// Create default ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    // Render options
    options.render.hardbreaks = false;
    options.render.unsafe_ = true; // Allow HTML (careful with this!)

    // Parse options
    options.parse.smart = true;
    options.parse.default_info_string = Some("text".to_string());

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown<'a>(content: &str, options: &Options<'a>) -> String {
    comrak::markdown_to_html(content, options)
}

/// Markdown renderer with optional code block highlighting.
///
/// Heading ids are left alone; the TOC pass assigns them later.
pub struct MarkdownRenderer {
    highlighter: Option<Arc<dyn Highlighter>>,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        MarkdownRenderer { highlighter: None }
    }

    /// Route fenced code blocks through `highlighter` after rendering
    pub fn with_highlighter(highlighter: Arc<dyn Highlighter>) -> Self {
        MarkdownRenderer {
            highlighter: Some(highlighter),
        }
    }

    fn highlight_code_blocks(&self, html: &str, highlighter: &dyn Highlighter) -> String {
        CODE_BLOCK_REGEX
            .replace_all(html, |caps: &regex::Captures| {
                let code = html_escape::decode_html_entities(&caps[2]).to_string();
                let language = caps.get(1).map(|m| m.as_str()).unwrap_or("text");
                highlighter.highlight(&code, language)
            })
            .to_string()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, markup: &str) -> BoxResult<String> {
        let options = create_comrak_options();
        let html = render_markdown(markup, &options);

        Ok(match &self.highlighter {
            Some(highlighter) => self.highlight_code_blocks(&html, highlighter.as_ref()),
            None => html,
        })
    }
}
