//! Request-boundary error handling.
//!
//! All component errors are caught once here, logged, and converted into a
//! uniform HTTP 500 with a generic plain-text body. No partial or degraded
//! response is ever returned.

use crate::composite::CompositeError;
use crate::provider::ProviderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Errors surfaced at the request-handler boundary.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Tile synthesis failed
    #[error(transparent)]
    Composite(#[from] CompositeError),

    /// Passthrough upstream fetch failed
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        error!(error = %self, "tile request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "error processing tile").into_response()
    }
}
