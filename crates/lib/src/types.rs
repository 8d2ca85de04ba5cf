//! # Core Data Model
//!
//! The public output record ([`Chunk`]), the configuration value passed
//! into every driver call ([`ChunkingOptions`]), the caller-supplied
//! document-type flag ([`HtmlType`]), and the transient structures produced
//! while scanning a document. Only `Chunk` values escape to callers; the
//! transient structures are owned by a single chunking run and discarded
//! after chunk emission.

use crate::errors::ChunkError;
use serde::{Deserialize, Serialize};

/// The word count the accumulator aims for before closing a chunk.
pub const DEFAULT_TARGET_WORDS: usize = 300;
/// The hard word ceiling; appending a sentence never pushes a chunk past
/// this when an earlier flush point existed.
pub const DEFAULT_MAX_WORDS: usize = 400;
/// Chunks below this are merged into their predecessor instead of emitted.
pub const DEFAULT_MIN_WORDS: usize = 50;
/// Trailing sentences repeated at the start of the next chunk.
pub const DEFAULT_OVERLAP_SENTENCES: usize = 2;

/// A word-bounded, sentence-aligned span of a document, tagged with source
/// and heading attribution. The atomic unit handed to embedding and lexical
/// indexing collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// `{source_id}:{ordinal}`. Ordinals are assigned sequentially as
    /// chunks are emitted and are stable only within one chunking run.
    pub id: String,
    /// Opaque identifier supplied by the caller; never interpreted.
    pub source_id: String,
    /// Opaque label supplied by the caller; never interpreted.
    pub source_title: String,
    /// Root-to-leaf section titles active when the chunk was started.
    /// Empty for content outside any heading context.
    pub heading_chain: Vec<String>,
    /// Plain-text content as a single whitespace-joined string, including
    /// any overlap carried over from the previous chunk.
    pub text: String,
    /// Minimal wrapped rendering of the non-overlap sentence content, for
    /// display rather than retrieval.
    pub html: String,
    /// Whitespace-delimited token count of `text` (overlap included).
    pub word_count: usize,
    /// Caller-defined position bounding the chunk; non-decreasing across
    /// the output sequence.
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Tuning knobs for the chunk accumulator.
///
/// An explicit value passed into every driver call; there are no implicit
/// global defaults baked into the algorithm. All fields fall back to the
/// documented defaults when omitted from a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingOptions {
    pub target_words: usize,
    pub max_words: usize,
    pub min_words: usize,
    pub overlap_sentences: usize,
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            target_words: DEFAULT_TARGET_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            min_words: DEFAULT_MIN_WORDS,
            overlap_sentences: DEFAULT_OVERLAP_SENTENCES,
        }
    }
}

impl ChunkingOptions {
    /// Rejects bound combinations the state machine cannot honor.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.target_words == 0 {
            return Err(ChunkError::InvalidOptions(
                "target_words must be greater than zero".to_string(),
            ));
        }
        if self.max_words < self.target_words {
            return Err(ChunkError::InvalidOptions(format!(
                "max_words ({}) must not be below target_words ({})",
                self.max_words, self.target_words
            )));
        }
        if self.min_words > self.target_words {
            return Err(ChunkError::InvalidOptions(format!(
                "min_words ({}) must not exceed target_words ({})",
                self.min_words, self.target_words
            )));
        }
        Ok(())
    }
}

/// Selects the chunking strategy for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlType {
    /// Real heading markup (H1-H6) is present, e.g. DOCX or Markdown
    /// conversion output.
    Structured,
    /// Paragraph-only HTML (e.g. PDF extraction); sections are inferred
    /// heuristically.
    Flat,
}

/// Defines the structure of the JSON payload accepted by
/// [`chunk_html_from_value`](crate::chunker::chunk_html_from_value).
#[derive(Debug, Deserialize)]
pub struct ChunkRequest {
    pub source_id: String,
    pub source_title: String,
    pub html: String,
    pub html_type: HtmlType,
    #[serde(default)]
    pub options: ChunkingOptions,
}

/// A block-level element recognized by the block parser.
///
/// Created per matched block and consumed immediately by the drivers;
/// never retained past the chunking run.
#[derive(Debug, Clone)]
pub struct HtmlElement {
    pub tag: String,
    /// Raw inner markup, used for offset accounting.
    pub content: String,
    /// Plain text after stripping markup and decoding entities.
    pub text: String,
    pub is_heading: bool,
    /// 1-6 for heading tags, 0 otherwise.
    pub heading_level: u8,
}

/// A section inferred from a flat element sequence.
#[derive(Debug, Clone)]
pub struct DetectedSection {
    /// The inferred heading text, or `None` when the section started
    /// before any heading-like block was seen.
    pub heading: Option<String>,
    pub elements: Vec<HtmlElement>,
    /// 0-based position within the detected section list.
    pub position: usize,
    pub total_sections: usize,
}

impl DetectedSection {
    /// The heading-chain label for this section: the inferred heading, or
    /// a positional fallback when none was inferable.
    pub fn label(&self) -> String {
        match &self.heading {
            Some(heading) => heading.clone(),
            None => format!("Section {} of {}", self.position + 1, self.total_sections),
        }
    }
}
