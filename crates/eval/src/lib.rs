//! # anychunk-eval: Chunk Quality Evaluation
//!
//! Downstream tooling that scores a finished chunk sequence: boundary
//! cleanliness, heading coverage, and the word-count distribution. Used by
//! test and validation tooling, not by the production chunking pipeline.

use anychunk::Chunk;
use serde::Serialize;
use tracing::debug;

/// Fixed-bucket word-count histogram over a chunk sequence.
///
/// The `300-400` bucket includes exactly 400 words; `over_400` is strict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WordCountHistogram {
    pub under_50: usize,
    pub from_50_to_200: usize,
    pub from_200_to_300: usize,
    pub from_300_to_400: usize,
    pub over_400: usize,
}

/// Aggregate quality metrics for one chunking run.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkQualityReport {
    pub total_chunks: usize,
    pub clean_boundary_count: usize,
    /// Fraction of chunks ending at a clean boundary.
    pub clean_boundary_ratio: f64,
    /// Fraction of non-empty chunks carrying a non-empty heading chain.
    pub heading_coverage: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub mean_words: f64,
    pub histogram: WordCountHistogram,
}

/// A chunk ends cleanly when its text ends in terminal punctuation
/// (possibly followed by one closing quote or bracket), or ends in a
/// closing parenthesis, or carries a non-empty heading chain — the latter
/// taken as evidence the chunk ended at a forced structural boundary
/// rather than mid-thought.
pub fn has_clean_boundary(chunk: &Chunk) -> bool {
    if !chunk.heading_chain.is_empty() {
        return true;
    }
    let mut chars = chunk.text.chars().rev();
    let Some(last) = chars.next() else {
        return false;
    };
    if last == ')' || is_terminal(last) {
        return true;
    }
    if is_closing(last) {
        return matches!(chars.next(), Some(c) if is_terminal(c));
    }
    false
}

/// Computes the quality report for a chunk sequence.
pub fn evaluate(chunks: &[Chunk]) -> ChunkQualityReport {
    let mut histogram = WordCountHistogram::default();
    let mut clean_boundary_count = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut total_words = 0;
    let mut non_empty = 0;
    let mut with_chain = 0;

    for chunk in chunks {
        match chunk.word_count {
            0..=49 => histogram.under_50 += 1,
            50..=199 => histogram.from_50_to_200 += 1,
            200..=299 => histogram.from_200_to_300 += 1,
            300..=400 => histogram.from_300_to_400 += 1,
            _ => histogram.over_400 += 1,
        }
        if has_clean_boundary(chunk) {
            clean_boundary_count += 1;
        }
        min_words = min_words.min(chunk.word_count);
        max_words = max_words.max(chunk.word_count);
        total_words += chunk.word_count;
        if !chunk.text.trim().is_empty() {
            non_empty += 1;
            if !chunk.heading_chain.is_empty() {
                with_chain += 1;
            }
        }
    }

    let total_chunks = chunks.len();
    debug!("Evaluated {total_chunks} chunks ({clean_boundary_count} clean boundaries)");

    ChunkQualityReport {
        total_chunks,
        clean_boundary_count,
        clean_boundary_ratio: ratio(clean_boundary_count, total_chunks),
        heading_coverage: ratio(with_chain, non_empty),
        min_words: if total_chunks == 0 { 0 } else { min_words },
        max_words,
        mean_words: if total_chunks == 0 {
            0.0
        } else {
            total_words as f64 / total_chunks as f64
        },
        histogram,
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}
