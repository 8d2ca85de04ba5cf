//! # Chunking Drivers
//!
//! Composes the block parser, heading tracking, section detection, and the
//! accumulator into the two document regimes: structured (real heading
//! markup) and flat (paragraph-only input with inferred sections). Both
//! drivers are pure, synchronous functions over one document; separate
//! documents can be chunked fully independently.

use crate::accumulator::ChunkAccumulator;
use crate::errors::ChunkError;
use crate::heading::HeadingTracker;
use crate::html::parse_blocks;
use crate::section::detect_sections;
use crate::types::{Chunk, ChunkRequest, ChunkingOptions, HtmlType};
use serde_json::Value;
use tracing::info;

/// Chunks a document whose HTML carries real heading markup.
///
/// Heading elements force a flush under the outgoing chain before the
/// heading stack is updated, so no chunk ever spans two heading contexts.
pub fn chunk_structured_html(
    source_id: &str,
    source_title: &str,
    html: &str,
    options: ChunkingOptions,
) -> Result<Vec<Chunk>, ChunkError> {
    options.validate()?;
    let elements = parse_blocks(html);
    info!(
        "Chunking structured document '{source_id}': {} block elements",
        elements.len()
    );

    let mut tracker = HeadingTracker::new();
    let mut accumulator = ChunkAccumulator::new(source_id, source_title, options);
    let mut offset = 0usize;

    for element in &elements {
        if element.is_heading {
            accumulator.flush(offset, &tracker.chain());
            tracker.observe(element.heading_level, &element.text);
        } else {
            accumulator.add_text(&element.text, offset, &tracker.chain());
        }
        offset += element.content.len();
    }
    accumulator.flush(offset, &tracker.chain());

    let chunks = accumulator.into_chunks();
    info!(
        "Structured chunking of '{source_id}' produced {} chunks",
        chunks.len()
    );
    Ok(chunks)
}

/// Chunks a paragraph-only document by first inferring its sections.
///
/// A single accumulator persists across sections, so overlap text carries
/// over section boundaries; each section still forces a flush (under the
/// previous section's label) before the active label switches.
pub fn chunk_flat_html(
    source_id: &str,
    source_title: &str,
    html: &str,
    options: ChunkingOptions,
) -> Result<Vec<Chunk>, ChunkError> {
    options.validate()?;
    let elements = parse_blocks(html);
    let sections = detect_sections(&elements);
    info!(
        "Chunking flat document '{source_id}': {} block elements in {} inferred sections",
        elements.len(),
        sections.len()
    );

    let mut accumulator = ChunkAccumulator::new(source_id, source_title, options);
    let mut chain: Vec<String> = Vec::new();
    let mut offset = 0usize;

    for section in &sections {
        accumulator.flush(offset, &chain);
        chain = vec![section.label()];
        for element in &section.elements {
            accumulator.add_text(&element.text, offset, &chain);
            offset += element.content.len();
        }
    }
    accumulator.flush(offset, &chain);

    let chunks = accumulator.into_chunks();
    info!(
        "Flat chunking of '{source_id}' produced {} chunks",
        chunks.len()
    );
    Ok(chunks)
}

/// Dispatches on the caller-supplied document type.
pub fn chunk_html(
    source_id: &str,
    source_title: &str,
    html: &str,
    html_type: HtmlType,
    options: ChunkingOptions,
) -> Result<Vec<Chunk>, ChunkError> {
    match html_type {
        HtmlType::Structured => chunk_structured_html(source_id, source_title, html, options),
        HtmlType::Flat => chunk_flat_html(source_id, source_title, html, options),
    }
}

/// Chunks a document described by a `serde_json::Value`.
///
/// This allows for easy integration with APIs that receive JSON payloads;
/// see [`ChunkRequest`] for the expected shape. Options fall back to the
/// documented defaults when omitted.
pub fn chunk_html_from_value(value: Value) -> Result<Vec<Chunk>, ChunkError> {
    let request: ChunkRequest = serde_json::from_value(value)?;
    chunk_html(
        &request.source_id,
        &request.source_title,
        &request.html,
        request.html_type,
        request.options,
    )
}
