use axum::{
    extract::{Request, State},
    http::{header::ALLOW, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ApiError, ErrorVerbosityProvider, MethodNotAllowedError};

/// Middleware to map axum's `MethodNotAllowed` response to our [`ApiError`].
///
/// The `Allow` header of the original response is kept.
pub async fn method_not_allowed<S: ErrorVerbosityProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let resp = next.run(req).await;

    if resp.status() != StatusCode::METHOD_NOT_ALLOWED {
        return resp;
    }

    tracing::warn!(%method, %uri, "Method not allowed");

    let mut headers = HeaderMap::new();
    if let Some(allow) = resp.headers().get(ALLOW) {
        headers.insert(ALLOW, allow.clone());
    }

    let error = ApiError::from(MethodNotAllowedError::new(state.error_verbosity()));

    (headers, error).into_response()
}
