//! # HTML Block Parser
//!
//! Scans a raw HTML fragment and yields the block-level elements the
//! chunker consumes: headings, paragraphs, list items, tables, lists, and
//! blockquotes, each reduced to plain text plus heading metadata. Pure,
//! stateless, single pass. Malformed markup never raises; unmatched spans
//! are simply skipped.

use crate::types::HtmlElement;

/// Block tags recognized by the parser, matched case-insensitively.
const BLOCK_TAGS: [&str; 12] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "table", "ul", "ol", "blockquote",
];

/// Parses an HTML fragment into its ordered block-level elements.
///
/// Each recognized opening tag is matched non-greedily to its nearest
/// matching close tag, and scanning resumes after that close tag, so a
/// list consumes its own items as one element. Elements whose derived
/// plain text is empty are discarded.
pub fn parse_blocks(html: &str) -> Vec<HtmlElement> {
    let mut elements = Vec::new();
    let mut pos = 0;

    while let Some(found) = html[pos..].find('<') {
        let open_start = pos + found;
        let Some((tag, content_start)) = match_block_open(html, open_start) else {
            pos = open_start + 1;
            continue;
        };
        let Some((close_start, close_end)) = find_close_tag(html, content_start, &tag) else {
            // No matching close tag; skip past the '<' and keep scanning.
            pos = open_start + 1;
            continue;
        };

        let content = &html[content_start..close_start];
        let text = element_text(content);
        if !text.is_empty() {
            let heading_level = heading_level_of(&tag);
            elements.push(HtmlElement {
                tag: tag.clone(),
                content: content.to_string(),
                text,
                is_heading: heading_level > 0,
                heading_level,
            });
        }
        pos = close_end;
    }

    elements
}

/// Heading level for `h1`-`h6`, 0 for everything else.
fn heading_level_of(tag: &str) -> u8 {
    match tag {
        "h1" => 1,
        "h2" => 2,
        "h3" => 3,
        "h4" => 4,
        "h5" => 5,
        "h6" => 6,
        _ => 0,
    }
}

/// Tries to read a recognized opening tag at `lt` (the index of `<`).
///
/// Returns the lowercased tag name and the index just past the opening
/// tag's `>`. Attributes are allowed between the name and the `>`.
fn match_block_open(html: &str, lt: usize) -> Option<(String, usize)> {
    let bytes = html.as_bytes();
    let name_start = lt + 1;
    let mut i = name_start;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = html[name_start..i].to_ascii_lowercase();
    if !BLOCK_TAGS.contains(&name.as_str()) {
        return None;
    }
    if i < bytes.len() && bytes[i] == b'>' {
        return Some((name, i + 1));
    }
    if i < bytes.len() && bytes[i].is_ascii_whitespace() {
        let gt = html[i..].find('>')?;
        return Some((name, i + gt + 1));
    }
    None
}

/// Finds `</tag>` (optional whitespace before `>`) at or after `from`,
/// case-insensitively. Returns the close tag's start and end indices.
fn find_close_tag(html: &str, from: usize, tag: &str) -> Option<(usize, usize)> {
    let bytes = html.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'<' && bytes[i + 1] == b'/' {
            let name_start = i + 2;
            let name_end = name_start + tag.len();
            if name_end <= bytes.len()
                && bytes[name_start..name_end].eq_ignore_ascii_case(tag.as_bytes())
            {
                let mut j = name_end;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                if j < bytes.len() && bytes[j] == b'>' {
                    return Some((i, j + 1));
                }
            }
        }
        i += 1;
    }
    None
}

/// Derives an element's plain text: strip all markup, decode the standard
/// entities, collapse whitespace runs to single spaces, trim.
fn element_text(content: &str) -> String {
    let stripped = strip_markup(content);
    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replaces every `<...>` span with a single space.
fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' if !in_tag => {
                in_tag = true;
                out.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Decodes the standard HTML entities. `&amp;` is decoded last so that
/// `&amp;lt;` yields the literal text `&lt;` rather than `<`.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
