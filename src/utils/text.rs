use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Strip HTML tags from text
pub fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").to_string()
}

/// Reduce an HTML fragment to its plain text content: tags removed,
/// entities decoded
pub fn inner_text(fragment: &str) -> String {
    let stripped = strip_html_tags(fragment);
    html_escape::decode_html_entities(&stripped).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html_tags("<em>hi</em> there"), "hi there");
        assert_eq!(strip_html_tags("plain"), "plain");
    }

    #[test]
    fn test_inner_text_decodes_entities() {
        assert_eq!(inner_text("<code>a &amp; b</code>"), "a & b");
        assert_eq!(inner_text("Fish &gt; Fowl"), "Fish > Fowl");
    }

}
