//! # Heuristic Section Detection
//!
//! Partitions the block sequence of an unstructured document (no real
//! heading markup, e.g. PDF extraction output) into sections by inferring
//! heading-like blocks from their shape: short, and either entirely
//! upper-case or lacking terminal punctuation while the following block
//! runs longer.

use crate::types::{DetectedSection, HtmlElement};

/// Word-count ceiling below which a block can be considered heading-like.
const HEADING_WORD_LIMIT: usize = 10;

/// Partitions `elements` into ordered sections, covering every input
/// element exactly once. Heading-like elements become section labels; all
/// other elements accumulate into the current section.
pub fn detect_sections(elements: &[HtmlElement]) -> Vec<DetectedSection> {
    let mut sections: Vec<DetectedSection> = Vec::new();
    let mut heading: Option<String> = None;
    let mut current: Vec<HtmlElement> = Vec::new();

    for (i, element) in elements.iter().enumerate() {
        if is_heading_like(element, elements.get(i + 1)) {
            if !current.is_empty() {
                sections.push(DetectedSection {
                    heading: heading.take(),
                    elements: std::mem::take(&mut current),
                    position: 0,
                    total_sections: 0,
                });
            }
            heading = Some(element.text.clone());
        } else {
            current.push(element.clone());
        }
    }

    if !current.is_empty() || heading.is_some() {
        sections.push(DetectedSection {
            heading,
            elements: current,
            position: 0,
            total_sections: 0,
        });
    }

    let total = sections.len();
    for (position, section) in sections.iter_mut().enumerate() {
        section.position = position;
        section.total_sections = total;
    }

    sections
}

/// A block is heading-like if it is short and either shouts (all caps) or
/// reads like a title (no terminal punctuation, followed by a longer
/// block).
fn is_heading_like(element: &HtmlElement, next: Option<&HtmlElement>) -> bool {
    let word_count = element.text.split_whitespace().count();
    if word_count >= HEADING_WORD_LIMIT {
        return false;
    }
    if is_all_caps(&element.text) {
        return true;
    }
    if !ends_with_terminal_punctuation(&element.text) {
        if let Some(next) = next {
            return next.text.split_whitespace().count() > word_count;
        }
    }
    false
}

/// Entirely upper-case and contains at least one letter.
fn is_all_caps(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic()) && !text.chars().any(|c| c.is_lowercase())
}

fn ends_with_terminal_punctuation(text: &str) -> bool {
    matches!(text.chars().last(), Some('.' | '!' | '?'))
}
