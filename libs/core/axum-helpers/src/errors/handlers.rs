use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Router fallback: the path matched nothing.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested resource was not found".to_string(),
        ErrorCode::NotFound,
    )
}

/// Method fallback: the path exists but not for this verb.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "The HTTP method is not allowed for this resource".to_string(),
        ErrorCode::MethodNotAllowed,
    )
}
