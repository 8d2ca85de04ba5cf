//! # Chunking Driver Tests
//!
//! End-to-end tests over the structured and flat drivers: heading
//! attribution, forced boundaries, word bounds, overlap carry-over,
//! offsets, and the JSON entry point.

use anychunk::{
    chunk_flat_html, chunk_html, chunk_html_from_value, chunk_structured_html, ChunkError,
    ChunkingOptions, HtmlType,
};
use anychunk_test_utils::{
    heading, labeled_sentence, paragraph, paragraph_of, tight_options,
};
use anyhow::Result;
use serde_json::json;

#[test]
fn test_structured_single_section_under_target() -> Result<()> {
    // --- Arrange ---
    let _ = tracing_subscriber::fmt().try_init();
    let html = format!(
        "{}{}{}",
        heading(1, "Introduction"),
        paragraph_of(40),
        paragraph_of(40)
    );

    // --- Act ---
    let chunks = chunk_structured_html("doc-1", "Manual", &html, ChunkingOptions::default())?;

    // --- Assert ---
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].word_count, 80);
    assert_eq!(chunks[0].heading_chain, vec!["Introduction"]);
    assert_eq!(chunks[0].id, "doc-1:0");
    assert_eq!(chunks[0].source_id, "doc-1");
    assert_eq!(chunks[0].source_title, "Manual");
    Ok(())
}

#[test]
fn test_structured_chunks_never_span_heading_contexts() -> Result<()> {
    // --- Arrange ---
    let html = format!(
        "{}{}{}{}{}{}",
        heading(1, "Guide"),
        paragraph_of(12),
        heading(2, "Install"),
        paragraph_of(12),
        heading(2, "Configure"),
        paragraph_of(12),
    );

    // --- Act ---
    let chunks = chunk_structured_html("doc", "Guide", &html, tight_options())?;

    // --- Assert ---
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].heading_chain, vec!["Guide"]);
    assert_eq!(chunks[1].heading_chain, vec!["Guide", "Install"]);
    assert_eq!(chunks[2].heading_chain, vec!["Guide", "Configure"]);
    Ok(())
}

#[test]
fn test_consecutive_headings_produce_no_empty_chunk() -> Result<()> {
    let html = format!(
        "{}{}{}",
        heading(2, "Draft title"),
        heading(2, "Final title"),
        paragraph_of(12),
    );
    let chunks = chunk_structured_html("doc", "Doc", &html, tight_options())?;

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].heading_chain, vec!["Final title"]);
    Ok(())
}

#[test]
fn test_single_oversized_sentence_is_never_split() -> Result<()> {
    let html = paragraph_of(500);
    let chunks = chunk_structured_html("doc", "Doc", &html, ChunkingOptions::default())?;

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].word_count, 500);
    assert!(chunks[0].heading_chain.is_empty());
    Ok(())
}

#[test]
fn test_word_bounds_and_monotonic_offsets() -> Result<()> {
    // --- Arrange ---
    let sentences: Vec<String> = (0..40)
        .map(|i| labeled_sentence(&format!("Item{i}x"), 10))
        .collect();
    let html = paragraph(&sentences);
    let options = ChunkingOptions {
        target_words: 50,
        max_words: 60,
        min_words: 10,
        overlap_sentences: 0,
    };

    // --- Act ---
    let chunks = chunk_flat_html("doc", "Doc", &html, options)?;

    // --- Assert ---
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.word_count <= options.max_words);
        assert!(chunk.word_count >= options.min_words);
        assert!(chunk.start_offset <= chunk.end_offset);
    }
    for pair in chunks.windows(2) {
        assert!(pair[0].end_offset <= pair[1].start_offset);
    }
    Ok(())
}

#[test]
fn test_flat_mode_infers_section_labels() -> Result<()> {
    // --- Arrange ---
    let first_body = labeled_sentence("Alpha", 12);
    let second_body = labeled_sentence("Bravo", 12);
    let html = format!(
        "<p>OVERVIEW</p>{}<p>Next steps</p>{}",
        paragraph(&[first_body.clone()]),
        paragraph(&[second_body.clone()]),
    );

    // --- Act ---
    let chunks = chunk_flat_html("doc", "Doc", &html, tight_options())?;

    // --- Assert ---
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].heading_chain, vec!["OVERVIEW"]);
    assert_eq!(chunks[1].heading_chain, vec!["Next steps"]);
    // Overlap persists across the section boundary.
    assert!(chunks[1].text.starts_with(&first_body));
    Ok(())
}

#[test]
fn test_flat_section_labels_never_come_from_the_future() -> Result<()> {
    // A buffered remainder from one section must close under that
    // section's label, not the label of the section that follows it.
    let body_a = labeled_sentence("Alpha", 12);
    let body_b = labeled_sentence("Bravo", 12);
    let html = format!("<p>FIRST</p><p>{body_a}</p><p>SECOND</p><p>{body_b}</p>");

    let chunks = chunk_flat_html("doc", "Doc", &html, tight_options())?;

    assert_eq!(chunks[0].heading_chain, vec!["FIRST"]);
    assert!(chunks[0].text.contains("Alpha"));
    assert!(!chunks[0].text.contains("Bravo"));
    Ok(())
}

#[test]
fn test_flat_mode_positional_fallback_label() -> Result<()> {
    let html = format!("{}{}", paragraph_of(15), paragraph_of(15));
    let chunks = chunk_flat_html("doc", "Doc", &html, tight_options())?;

    assert!(!chunks.is_empty());
    assert!(chunks
        .iter()
        .all(|c| c.heading_chain == vec!["Section 1 of 1".to_string()]));
    Ok(())
}

#[test]
fn test_trailing_fragment_merges_into_previous_chunk() -> Result<()> {
    let html = format!("{}{}{}", heading(1, "Main"), paragraph_of(20), paragraph_of(3));
    let chunks = chunk_structured_html("doc", "Doc", &html, tight_options())?;

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].word_count, 23);
    Ok(())
}

#[test]
fn test_rechunking_is_idempotent() -> Result<()> {
    let html = format!(
        "{}{}{}{}",
        heading(1, "Title"),
        paragraph_of(25),
        heading(2, "Sub"),
        paragraph_of(25)
    );

    let first = chunk_html("doc", "Doc", &html, HtmlType::Structured, tight_options())?;
    let second = chunk_html("doc", "Doc", &html, HtmlType::Structured, tight_options())?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_chunk_html_dispatches_on_type() -> Result<()> {
    let html = format!("<p>SUMMARY</p>{}", paragraph_of(12));

    let structured = chunk_html("doc", "Doc", &html, HtmlType::Structured, tight_options())?;
    let flat = chunk_html("doc", "Doc", &html, HtmlType::Flat, tight_options())?;

    // Structured mode sees no real headings; flat mode infers one.
    assert!(structured[0].heading_chain.is_empty());
    assert_eq!(flat[0].heading_chain, vec!["SUMMARY"]);
    Ok(())
}

#[test]
fn test_chunk_html_from_value() -> Result<()> {
    let value = json!({
        "source_id": "doc-9",
        "source_title": "Payload",
        "html": format!("{}{}", heading(1, "Intro"), paragraph_of(30)),
        "html_type": "structured",
    });

    let chunks = chunk_html_from_value(value)?;

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].id, "doc-9:0");
    assert_eq!(chunks[0].heading_chain, vec!["Intro"]);
    Ok(())
}

#[test]
fn test_chunk_html_from_value_rejects_bad_payload() {
    let result = chunk_html_from_value(json!({ "html": 42 }));
    assert!(matches!(
        result,
        Err(ChunkError::RequestDeserialization(_))
    ));
}

#[test]
fn test_invalid_options_are_rejected() {
    let options = ChunkingOptions {
        target_words: 300,
        max_words: 200,
        min_words: 50,
        overlap_sentences: 2,
    };
    let result = chunk_structured_html("doc", "Doc", "<p>Hello there.</p>", options);
    assert!(matches!(result, Err(ChunkError::InvalidOptions(_))));
}

#[test]
fn test_empty_document_produces_no_chunks() -> Result<()> {
    assert!(chunk_structured_html("doc", "Doc", "", ChunkingOptions::default())?.is_empty());
    assert!(chunk_flat_html("doc", "Doc", "<p>   </p>", ChunkingOptions::default())?.is_empty());
    Ok(())
}
