use thiserror::Error;

/// Custom error types for the chunking engine.
///
/// Chunking never fails on malformed or degenerate document input (bad
/// markup simply yields fewer recognized blocks). The only fallible
/// surfaces are option validation and JSON request parsing.
#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Invalid chunking options: {0}")]
    InvalidOptions(String),
    #[error("Failed to deserialize chunk request: {0}")]
    RequestDeserialization(#[from] serde_json::Error),
}
