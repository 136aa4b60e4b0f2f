use std::sync::Arc;

use log::debug;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::filters::Highlighter;

/// Component for syntax highlighting code blocks in HTML
pub struct SyntaxHighlighter {
    syntax_set: Arc<SyntaxSet>,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with the bundled syntax set
    pub fn new() -> Self {
        SyntaxHighlighter {
            syntax_set: Arc::new(SyntaxSet::load_defaults_newlines()),
        }
    }

    fn plain_block(&self, code: &str, language: &str) -> String {
        wrap_block(language, &html_escape::encode_text(code))
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntaxHighlighter {
    fn highlight(&self, code: &str, language: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .unwrap_or_else(|| {
                debug!("No syntax for language '{}', using plain text", language);
                self.syntax_set.find_syntax_plain_text()
            });

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::Spaced,
        );

        for line in LinesWithEndings::from(code) {
            if generator
                .parse_html_for_line_which_includes_newline(line)
                .is_err()
            {
                return self.plain_block(code, language);
            }
        }

        wrap_block(language, &generator.finalize())
    }
}

fn wrap_block(language: &str, body: &str) -> String {
    format!(
        "<div class=\"code highlight\"><pre class=\"highlight {}\"><code>{}</code></pre></div>",
        language, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_known_language() {
        let highlighter = SyntaxHighlighter::new();
        let html = highlighter.highlight("fn main() {}\n", "rust");

        assert!(html.starts_with("<div class=\"code highlight\">"));
        assert!(html.contains("<pre class=\"highlight rust\">"));
        assert!(html.contains("<span"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let highlighter = SyntaxHighlighter::new();
        let html = highlighter.highlight("(def x 1)\n", "no-such-language");

        assert!(html.contains("<pre class=\"highlight no-such-language\">"));
        assert!(html.contains("(def x 1)"));
    }
}
