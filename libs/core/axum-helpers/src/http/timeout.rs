use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};

use crate::errors::{ErrorCode, error_response};

/// Middleware that gives timed-out requests the standard JSON error body.
///
/// `TimeoutLayer` answers with an empty 408; this must wrap it so the
/// rewrite sees that response. A 408 that already carries a content type
/// came from a handler and is left alone.
pub async fn timeout_error_body(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if response.status() != StatusCode::REQUEST_TIMEOUT
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    tracing::warn!(
        error_code = ErrorCode::Timeout.code(),
        "Request timed out"
    );
    error_response(
        StatusCode::REQUEST_TIMEOUT,
        ErrorCode::Timeout.default_message().to_string(),
        ErrorCode::Timeout,
    )
}
