use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::toc::selector::{find_element, Selector};
use crate::utils::error::BoxResult;
use crate::utils::text::inner_text;

lazy_static! {
    static ref HEADING_REGEX: Regex =
        Regex::new(r"(?s)<[hH]([234])([^>]*)>(.*?)</[hH][234]\s*>").unwrap();
    static ref ANCHOR_REGEX: Regex = Regex::new(r"\W+").unwrap();
    static ref ID_ATTR_REGEX: Regex =
        Regex::new(r#"(?i)\s*(?:^|\s)id\s*=\s*("[^"]*"|'[^']*'|[^\s"'>]+)"#).unwrap();
}

/// A numbered heading in a document's outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading depth: 2, 3 or 4
    pub level: usize,
    /// Heading text including its numbering prefix
    pub text: String,
    /// Element id used as the link target for this heading
    pub anchor: String,
    /// Subsections, in document order
    pub children: Vec<Heading>,
}

impl Heading {
    pub fn new(level: usize, text: String, anchor: String) -> Self {
        Heading {
            level,
            text,
            anchor,
            children: Vec::new(),
        }
    }
}

/// Per-document numbering state for the three tracked heading levels
#[derive(Debug, Default)]
struct HeadingCounter {
    h2: usize,
    h3: usize,
    h4: usize,
}

impl HeadingCounter {
    /// Count a heading: deeper levels restart whenever a shallower one
    /// appears
    fn bump(&mut self, level: usize) {
        match level {
            2 => {
                self.h2 += 1;
                self.h3 = 0;
                self.h4 = 0;
            }
            3 => {
                self.h3 += 1;
                self.h4 = 0;
            }
            _ => self.h4 += 1,
        }
    }

    /// The dot-joined numbering label with zero components elided,
    /// e.g. `2.` or `2.1.` or `2.1.3.`
    fn label(&self) -> String {
        let mut label = format!("{}.{}.{}", self.h2, self.h3, self.h4).replace(".0", "");
        label.push('.');
        label
    }
}

/// Derive a link anchor from heading text: every run of non-word
/// characters becomes a single underscore
pub fn to_anchor(text: &str) -> String {
    ANCHOR_REGEX.replace_all(text, "_").to_string()
}

/// Number the h2/h3/h4 headings inside the element matching
/// `content_selector` and collect them into an outline tree.
///
/// Heading text is rewritten in place with a hierarchical numbering
/// prefix and each heading's id attribute is set to an anchor derived
/// from the prefixed text. Anchors are not checked for collisions; when
/// two headings derive the same anchor the later one wins, matching the
/// links already published by this generator.
///
/// When nothing matches `content_selector` the document comes back
/// unchanged with an empty outline. Indexing is single-pass: running it
/// again over its own output prefixes the numbering a second time.
pub fn index_headings(html: &str, content_selector: &str) -> BoxResult<(String, Vec<Heading>)> {
    let selector = Selector::parse(content_selector);
    let region = match find_element(html, &selector)? {
        Some(region) => region,
        None => return Ok((html.to_string(), Vec::new())),
    };

    let content = &html[region.content_start..region.content_end];
    let mut counter = HeadingCounter::default();
    let mut outline: Vec<Heading> = Vec::new();

    let mut rewritten = String::with_capacity(content.len());
    let mut last_end = 0;

    for caps in HEADING_REGEX.captures_iter(content) {
        let whole = caps.get(0).unwrap();
        let level = match &caps[1] {
            "2" => 2,
            "3" => 3,
            _ => 4,
        };

        counter.bump(level);

        let body = inner_text(caps.get(3).map(|m| m.as_str()).unwrap_or(""));
        let text = if body.is_empty() {
            counter.label()
        } else {
            format!("{} {}", counter.label(), body)
        };
        let anchor = to_anchor(&text);
        let attrs = strip_id_attr(caps.get(2).map(|m| m.as_str()).unwrap_or(""));

        rewritten.push_str(&content[last_end..whole.start()]);
        rewritten.push_str(&format!(
            "<h{level}{attrs} id=\"{anchor}\">{text}</h{level}>",
            level = level,
            attrs = attrs,
            anchor = anchor,
            text = html_escape::encode_text(&text),
        ));
        last_end = whole.end();

        attach(&mut outline, Heading::new(level, text, anchor));
    }

    rewritten.push_str(&content[last_end..]);

    let mut output = String::with_capacity(html.len() + 64);
    output.push_str(&html[..region.content_start]);
    output.push_str(&rewritten);
    output.push_str(&html[region.content_end..]);

    Ok((output, outline))
}

/// Append a heading under the most recent heading one level up: h3s nest
/// under the last h2, h4s under the last h3 of the last h2. A heading
/// arriving before any possible parent attaches at the nearest level
/// that exists.
fn attach(outline: &mut Vec<Heading>, heading: Heading) {
    let mut target = outline;
    for _ in 2..heading.level {
        if target.is_empty() {
            break;
        }
        target = &mut target.last_mut().unwrap().children;
    }
    target.push(heading);
}

/// Drop any id attribute, keeping the rest of the attribute text
fn strip_id_attr(attrs: &str) -> String {
    let cleaned = ID_ATTR_REGEX.replace_all(attrs, "");
    let cleaned = cleaned.trim_end();
    if cleaned.is_empty() {
        String::new()
    } else if cleaned.starts_with(' ') {
        cleaned.to_string()
    } else {
        format!(" {}", cleaned)
    }
}
