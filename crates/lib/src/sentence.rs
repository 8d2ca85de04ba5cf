//! # Sentence Boundary Detection
//!
//! Splits block text into sentences while protecting common abbreviations,
//! initials, and numeric periods from false splits. The rules bias toward
//! never splitting mid-sentence, at the cost of occasionally treating two
//! short sentences as one.
//!
//! Periods that are not true sentence terminators are first masked with a
//! sentinel character, a boundary scan then splits the masked text, and
//! each segment is unmasked and trimmed.

use regex::Regex;
use std::sync::OnceLock;

/// Sentinel standing in for a protected period while boundaries are
/// scanned. Taken from the private use area, assumed absent from document
/// text.
const MASKED_PERIOD: char = '\u{e000}';

/// Titles and abbreviations whose trailing period never ends a sentence.
const ABBREVIATIONS: &str =
    "Dr|Mr|Mrs|Ms|Prof|Jr|Sr|Inc|Ltd|Corp|Co|vs|etc|al|ed|vol|Rev|Gen|Gov";

struct MaskRules {
    latin: Regex,
    abbreviations: Regex,
    initials: Regex,
    digits: Regex,
    page_refs: Regex,
}

fn mask_rules() -> &'static MaskRules {
    static RULES: OnceLock<MaskRules> = OnceLock::new();
    RULES.get_or_init(|| MaskRules {
        latin: Regex::new(r"\b(?:e\.g\.|i\.e\.)").expect("latin abbreviation pattern is a valid literal"),
        abbreviations: Regex::new(&format!(r"\b({ABBREVIATIONS})\."))
            .expect("abbreviation pattern is a valid literal"),
        initials: Regex::new(r"\b([A-Z])\.").expect("initials pattern is a valid literal"),
        digits: Regex::new(r"([0-9])\.").expect("digit pattern is a valid literal"),
        page_refs: Regex::new(r"\bp\.(\s)").expect("page reference pattern is a valid literal"),
    })
}

/// Splits text into an ordered sequence of non-empty sentences.
///
/// A boundary is a `.`, `!`, or `?`, optionally followed by one closing
/// quote or bracket, followed by whitespace, followed by an uppercase
/// letter, a quote, or an opening parenthesis.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let masked = mask_non_terminators(text);
    let mut sentences = Vec::new();
    let mut start = 0;
    for (end, next) in boundaries(&masked) {
        push_segment(&masked[start..end], &mut sentences);
        start = next;
    }
    push_segment(&masked[start..], &mut sentences);
    sentences
}

/// The last `n` sentences of `text`, rejoined with single spaces. Used to
/// construct overlap text carried into the next chunk.
pub fn last_sentences(text: &str, n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let sentences = split_sentences(text);
    let skip = sentences.len().saturating_sub(n);
    sentences[skip..].join(" ")
}

/// Masks every period that must not be treated as a sentence terminator.
fn mask_non_terminators(text: &str) -> String {
    let rules = mask_rules();
    let mask = MASKED_PERIOD.to_string();

    let text = rules
        .latin
        .replace_all(text, |caps: &regex::Captures| caps[0].replace('.', &mask));
    let text = rules
        .abbreviations
        .replace_all(&text, format!("${{1}}{MASKED_PERIOD}"));
    let text = rules
        .initials
        .replace_all(&text, format!("${{1}}{MASKED_PERIOD}"));
    let text = rules
        .digits
        .replace_all(&text, format!("${{1}}{MASKED_PERIOD}"));
    let text = rules
        .page_refs
        .replace_all(&text, format!("p{MASKED_PERIOD}${{1}}"));
    text.into_owned()
}

/// Scans masked text for sentence boundaries. Each entry is the byte index
/// where a segment ends and the byte index where the next segment starts.
fn boundaries(masked: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = masked.char_indices().collect();
    let mut splits = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if is_terminator(chars[i].1) {
            let mut j = i + 1;
            if j < chars.len() && is_closing(chars[j].1) {
                j += 1;
            }
            let ws_start = j;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            if j > ws_start && j < chars.len() && starts_sentence(chars[j].1) {
                splits.push((chars[ws_start].0, chars[j].0));
                i = j;
                continue;
            }
        }
        i += 1;
    }

    splits
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn starts_sentence(c: char) -> bool {
    c.is_uppercase() || matches!(c, '"' | '\'' | '(' | '\u{201c}' | '\u{2018}')
}

fn push_segment(segment: &str, sentences: &mut Vec<String>) {
    let restored = segment.replace(MASKED_PERIOD, ".");
    let trimmed = restored.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
