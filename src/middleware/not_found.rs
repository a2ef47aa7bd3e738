use axum::{extract::State, http::Uri};

use crate::error::{ApiError, ErrorVerbosityProvider, NotFoundError};

/// Fallback for routes that do not exist.
pub async fn not_found<S: ErrorVerbosityProvider>(State(state): State<S>, uri: Uri) -> ApiError {
    tracing::warn!(%uri, "Not found");

    NotFoundError::new(state.error_verbosity()).into()
}
