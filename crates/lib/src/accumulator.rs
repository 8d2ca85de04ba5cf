//! # Chunk Accumulation State Machine
//!
//! The stateful reducer at the core of the engine. It consumes text tagged
//! with an offset and the heading chain active at the time, buffers whole
//! sentences, and emits finished chunks honoring the configured word
//! bounds, forced boundary flushes, small-chunk merging, and
//! trailing-sentence overlap carried into the next chunk.
//!
//! The accumulator has no error states; every input is absorbed.
//! Whitespace-only and empty inputs contribute nothing.

use crate::sentence::split_sentences;
use crate::types::{Chunk, ChunkingOptions};
use tracing::{debug, warn};

/// Counts whitespace-delimited tokens.
pub(crate) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Accumulates sentences into word-bounded chunks for one document.
///
/// State transitions happen only in [`add_text`](Self::add_text) and
/// [`flush`](Self::flush); the heading chain is an explicit snapshot
/// passed into each call rather than captured state, so no chunk can
/// observe a chain mutated after its content was buffered.
#[derive(Debug)]
pub struct ChunkAccumulator {
    source_id: String,
    source_title: String,
    options: ChunkingOptions,
    sentences: Vec<String>,
    word_count: usize,
    overlap_text: String,
    start_offset: usize,
    chunks: Vec<Chunk>,
}

impl ChunkAccumulator {
    pub fn new(source_id: &str, source_title: &str, options: ChunkingOptions) -> Self {
        Self {
            source_id: source_id.to_string(),
            source_title: source_title.to_string(),
            options,
            sentences: Vec::new(),
            word_count: 0,
            overlap_text: String::new(),
            start_offset: 0,
            chunks: Vec::new(),
        }
    }

    /// Splits `text` into sentences and feeds each into the buffer.
    ///
    /// Before a sentence is appended, the buffer is flushed if the
    /// addition would push it past `max_words`; after it is appended, the
    /// buffer is flushed once it reaches `target_words`. A sentence longer
    /// than `max_words` on its own is never split; it flushes as a single
    /// oversized chunk.
    pub fn add_text(&mut self, text: &str, offset: usize, heading_chain: &[String]) {
        for sentence in split_sentences(text) {
            let sentence_words = count_words(&sentence);
            if sentence_words == 0 {
                continue;
            }
            if !self.sentences.is_empty()
                && self.word_count + sentence_words > self.options.max_words
            {
                self.flush(offset, heading_chain);
            }
            if self.sentences.is_empty() {
                self.start_offset = offset;
            }
            if sentence_words > self.options.max_words {
                warn!(
                    "Sentence of {sentence_words} words exceeds max_words ({}); it will flush as its own chunk",
                    self.options.max_words
                );
            }
            self.word_count += sentence_words;
            self.sentences.push(sentence);
            if self.word_count >= self.options.target_words {
                self.flush(offset, heading_chain);
            }
        }
    }

    /// Closes the buffered sentences into a chunk. No-op on an empty
    /// buffer.
    ///
    /// A buffer below `min_words` is merged into the previously emitted
    /// chunk instead of producing an orphan fragment; the previous chunk
    /// may exceed `max_words` in that one case. The very first chunk of a
    /// document is emitted whatever its size.
    pub fn flush(&mut self, end_offset: usize, heading_chain: &[String]) {
        if self.sentences.is_empty() {
            return;
        }
        let text = self.sentences.join(" ");
        let word_count = count_words(&text);

        if word_count < self.options.min_words {
            if let Some(previous) = self.chunks.last_mut() {
                debug!(
                    "Merging {word_count} undersized words into chunk {}",
                    previous.id
                );
                previous.text.push(' ');
                previous.text.push_str(&text);
                previous.html.push_str(&format!("<p>{text}</p>"));
                previous.word_count = count_words(&previous.text);
                previous.end_offset = end_offset;
                self.carry_overlap();
                return;
            }
        }

        let chunk_text = if self.overlap_text.is_empty() {
            text.clone()
        } else {
            format!("{} {}", self.overlap_text, text)
        };
        let chunk = Chunk {
            id: format!("{}:{}", self.source_id, self.chunks.len()),
            source_id: self.source_id.clone(),
            source_title: self.source_title.clone(),
            heading_chain: heading_chain.to_vec(),
            word_count: count_words(&chunk_text),
            text: chunk_text,
            html: format!("<p>{text}</p>"),
            start_offset: self.start_offset,
            end_offset,
        };
        debug!("Emitted chunk {} ({} words)", chunk.id, chunk.word_count);
        self.chunks.push(chunk);
        self.carry_overlap();
    }

    /// Recomputes the overlap from the trailing sentences of the buffer,
    /// then clears the buffer.
    fn carry_overlap(&mut self) {
        let keep = self
            .sentences
            .len()
            .saturating_sub(self.options.overlap_sentences);
        self.overlap_text = self.sentences[keep..].join(" ");
        self.sentences.clear();
        self.word_count = 0;
    }

    /// The chunks emitted so far.
    pub fn emitted(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Consumes the accumulator, returning the finished chunk sequence.
    pub fn into_chunks(self) -> Vec<Chunk> {
        self.chunks
    }
}
