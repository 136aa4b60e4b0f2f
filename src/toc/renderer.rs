use crate::toc::indexer::Heading;
use crate::toc::selector::{find_element, Selector};
use crate::utils::error::BoxResult;

/// Serialize the outline into a nested ordered list and append it inside
/// the element matching `toc_selector`.
///
/// Existing children of the matched element are kept; the list is added
/// after them. When nothing matches the selector the document is
/// returned byte-identical, since not every layout carries a TOC anchor.
pub fn render_toc(html: &str, outline: &[Heading], toc_selector: &str) -> BoxResult<String> {
    let selector = Selector::parse(toc_selector);
    let region = match find_element(html, &selector)? {
        Some(region) => region,
        None => return Ok(html.to_string()),
    };

    let mut list = String::from("<ol>");
    build_list(&mut list, outline);
    list.push_str("</ol>");

    let mut output = String::with_capacity(html.len() + list.len());
    output.push_str(&html[..region.content_end]);
    output.push_str(&list);
    output.push_str(&html[region.content_end..]);

    Ok(output)
}

fn build_list(out: &mut String, headings: &[Heading]) {
    for heading in headings {
        out.push_str("<li>");
        out.push_str(&format!(
            "<a href=\"#{}\">{}</a>",
            heading.anchor,
            html_escape::encode_text(&heading.text)
        ));
        if !heading.children.is_empty() {
            out.push_str("<ol>");
            build_list(out, &heading.children);
            out.push_str("</ol>");
        }
        out.push_str("</li>");
    }
}
