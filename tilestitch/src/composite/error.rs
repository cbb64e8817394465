//! Error types for tile compositing.

use thiserror::Error;

/// Errors that can occur while synthesizing a tile from child tiles.
///
/// Any single failure aborts the whole composite; there is no retry and no
/// partial-result fallback.
#[derive(Debug, Error)]
pub enum CompositeError {
    /// A child tile fetch failed (network error or non-success status)
    #[error("fetch failed for child tile ({x}, {y}) at zoom {zoom}: {message}")]
    FetchFailed {
        zoom: u8,
        x: u32,
        y: u32,
        message: String,
    },

    /// A fetched child tile could not be decoded
    #[error("image decode failed for child tile ({x}, {y}): {message}")]
    DecodeFailed { x: u32, y: u32, message: String },

    /// The assembled canvas could not be encoded
    #[error("image encode failed: {0}")]
    EncodeFailed(String),

    /// Internal error (task join failure or panic)
    #[error("internal error: {0}")]
    Internal(String),
}
