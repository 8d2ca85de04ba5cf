//! # Shared Test Fixtures
//!
//! Helpers for building HTML documents with controlled word counts, so
//! integration tests across the workspace can assert exact chunk shapes
//! without hand-writing long paragraphs.

use anychunk::ChunkingOptions;

/// Builds one sentence of exactly `n` words: a capitalized opener,
/// numbered filler words, and a pure-alphabetic final word ending in a
/// period, so the sentence splitter sees a single clean sentence.
pub fn sentence_of(n: usize) -> String {
    labeled_sentence("Word1", n)
}

/// Like [`sentence_of`], but the first word is `label` (which must start
/// with an uppercase letter so a preceding sentence can end before it).
pub fn labeled_sentence(label: &str, n: usize) -> String {
    assert!(n > 0, "a sentence needs at least one word");
    if n == 1 {
        return "Stop.".to_string();
    }
    let mut words = Vec::with_capacity(n);
    words.push(label.to_string());
    for i in 2..n {
        words.push(format!("word{i}"));
    }
    words.push("stop.".to_string());
    words.join(" ")
}

/// Wraps sentences into a single `<p>` block.
pub fn paragraph(sentences: &[String]) -> String {
    format!("<p>{}</p>", sentences.join(" "))
}

/// A `<p>` block holding one sentence of exactly `n` words.
pub fn paragraph_of(n: usize) -> String {
    paragraph(&[sentence_of(n)])
}

/// A heading block of the given level.
pub fn heading(level: u8, text: &str) -> String {
    format!("<h{level}>{text}</h{level}>")
}

/// Small bounds that keep test documents short: target 20, max 30,
/// min 5, one overlap sentence.
pub fn tight_options() -> ChunkingOptions {
    ChunkingOptions {
        target_words: 20,
        max_words: 30,
        min_words: 5,
        overlap_sentences: 1,
    }
}
