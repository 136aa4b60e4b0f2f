use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::{BookbindError, BoxResult};

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)([^>]*)>").unwrap();
    static ref SELECTOR_TOKEN_REGEX: Regex = Regex::new(r"([#.]?)([^#.\s]+)").unwrap();
    static ref ID_ATTR_REGEX: Regex =
        Regex::new(r#"(?i)(?:^|\s)id\s*=\s*("([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap();
    static ref CLASS_ATTR_REGEX: Regex =
        Regex::new(r#"(?i)(?:^|\s)class\s*=\s*("([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap();
}

/// Pull a quoted or bare attribute value out of a tag's attribute text
fn extract_attr(regex: &Regex, attrs: &str) -> Option<String> {
    regex.captures(attrs).map(|cap| {
        cap.get(2)
            .or_else(|| cap.get(3))
            .or_else(|| cap.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    })
}

/// Elements that never have a closing tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// One compound selector: optional tag name plus id/class qualifiers
#[derive(Debug, Clone, Default, PartialEq)]
struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl SimpleSelector {
    fn parse(token: &str) -> Self {
        let mut selector = SimpleSelector::default();

        for cap in SELECTOR_TOKEN_REGEX.captures_iter(token) {
            match &cap[1] {
                "#" => selector.id = Some(cap[2].to_string()),
                "." => selector.classes.push(cap[2].to_string()),
                _ => selector.tag = Some(cap[2].to_lowercase()),
            }
        }

        selector
    }

    fn matches(&self, tag: &str, attrs: &str) -> bool {
        if let Some(expected) = &self.tag {
            if expected != "*" && expected != tag {
                return false;
            }
        }

        if let Some(expected) = &self.id {
            match extract_attr(&ID_ATTR_REGEX, attrs) {
                Some(id) if &id == expected => {}
                _ => return false,
            }
        }

        if !self.classes.is_empty() {
            let class_attr = extract_attr(&CLASS_ATTR_REGEX, attrs).unwrap_or_default();
            let classes: Vec<&str> = class_attr.split_whitespace().collect();
            for wanted in &self.classes {
                if !classes.iter().any(|c| c == wanted) {
                    return false;
                }
            }
        }

        true
    }
}

/// A parsed CSS-style selector: a descendant chain of simple selectors,
/// e.g. `#toc.nav li.active-section`
#[derive(Debug, Clone)]
pub struct Selector {
    parts: Vec<SimpleSelector>,
    source: String,
}

impl Selector {
    pub fn parse(selector: &str) -> Self {
        Selector {
            parts: selector.split_whitespace().map(SimpleSelector::parse).collect(),
            source: selector.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Byte offsets delimiting a matched element within the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRegion {
    /// Offset of the element's `<`
    pub open_start: usize,
    /// Offset just past the opening tag's `>`
    pub content_start: usize,
    /// Offset of the closing tag (end of the element's content)
    pub content_end: usize,
    /// Offset just past the closing tag's `>`
    pub close_end: usize,
}

struct OpenElement {
    name: String,
    matched_prefix: usize,
    is_target: bool,
    open_start: usize,
    content_start: usize,
}

/// Locate the first element matching `selector`, scanning tags leniently.
///
/// Unknown tags, stray closing tags and void elements are tolerated; the
/// only unrecoverable shape is a matched element that is still open when
/// the document ends. A close tag of an ancestor implicitly closes the
/// matched element at that ancestor's boundary.
pub fn find_element(html: &str, selector: &Selector) -> BoxResult<Option<ElementRegion>> {
    if selector.is_empty() {
        return Ok(None);
    }

    let mut stack: Vec<OpenElement> = Vec::new();

    for cap in TAG_REGEX.captures_iter(html) {
        let whole = cap.get(0).unwrap();
        let closing = !cap[1].is_empty();
        let name = cap[2].to_lowercase();
        let attrs = cap.get(3).map(|m| m.as_str()).unwrap_or("");

        if closing {
            // Close the nearest open element of this name; anything opened
            // after it is implicitly closed at the same boundary.
            let position = match stack.iter().rposition(|open| open.name == name) {
                Some(position) => position,
                None => continue,
            };

            for (offset, open) in stack.drain(position..).enumerate() {
                if open.is_target {
                    let direct = offset == 0;
                    return Ok(Some(ElementRegion {
                        open_start: open.open_start,
                        content_start: open.content_start,
                        content_end: whole.start(),
                        close_end: if direct { whole.end() } else { whole.start() },
                    }));
                }
            }
            continue;
        }

        let inherited = stack.last().map(|open| open.matched_prefix).unwrap_or(0);
        let mut matched_prefix = inherited;
        if inherited < selector.parts.len() && selector.parts[inherited].matches(&name, attrs) {
            matched_prefix += 1;
        }

        let target_open = stack.iter().any(|open| open.is_target);
        let is_target = !target_open && matched_prefix == selector.parts.len();

        let self_closing = attrs.trim_end().ends_with('/') || VOID_ELEMENTS.contains(&name.as_str());
        if self_closing {
            if is_target {
                return Ok(Some(ElementRegion {
                    open_start: whole.start(),
                    content_start: whole.end(),
                    content_end: whole.end(),
                    close_end: whole.end(),
                }));
            }
            continue;
        }

        stack.push(OpenElement {
            name,
            matched_prefix,
            is_target,
            open_start: whole.start(),
            content_start: whole.end(),
        });
    }

    if stack.iter().any(|open| open.is_target) {
        return Err(Box::new(BookbindError::Parse(format!(
            "Element matching '{}' is never closed",
            selector.source
        ))));
    }

    Ok(None)
}
