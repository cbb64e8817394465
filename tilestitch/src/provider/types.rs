//! Provider types and traits

use std::fmt;
use std::future::Future;

/// Errors that can occur during provider operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// HTTP request failed (network error or non-success status)
    HttpError(String),
    /// Invalid response data from provider
    InvalidResponse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Trait for upstream tile providers.
///
/// Implementors fetch a single encoded raster tile addressed by zoom/x/y.
/// Failures are never retried here; a failed fetch aborts the enclosing
/// operation.
pub trait TileProvider: Send + Sync {
    /// Fetches one encoded tile at the given address.
    ///
    /// Coordinates are forwarded as-is; the upstream endpoint is the one
    /// that rejects out-of-range addresses.
    fn fetch_tile(
        &self,
        zoom: u8,
        x: u32,
        y: u32,
    ) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;
}
