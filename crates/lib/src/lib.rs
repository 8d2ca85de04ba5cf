//! # anychunk
//!
//! This crate transforms an HTML-rendered source document (originating
//! from DOCX, Markdown, or PDF conversion) into an ordered sequence of
//! word-bounded, sentence-aligned text chunks suitable for embedding and
//! lexical retrieval.
//!
//! Two input regimes are supported:
//!
//! 1. **Structured**: the HTML carries real heading markup (H1-H6); the
//!    heading chain active at each point becomes chunk attribution, and
//!    heading transitions force chunk boundaries.
//! 2. **Flat**: paragraph-only HTML (e.g. PDF extraction); sections are
//!    inferred from block shape heuristics and their labels stand in for
//!    heading chains.
//!
//! The engine is a pure, synchronous computation over one document at a
//! time; callers may fan out across documents freely.

pub mod accumulator;
pub mod chunker;
pub mod errors;
pub mod heading;
pub mod html;
pub mod section;
pub mod sentence;
pub mod types;

pub use accumulator::ChunkAccumulator;
pub use chunker::{chunk_flat_html, chunk_html, chunk_html_from_value, chunk_structured_html};
pub use errors::ChunkError;
pub use types::{Chunk, ChunkRequest, ChunkingOptions, HtmlType};
