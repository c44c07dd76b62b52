use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback for unknown routes.
pub async fn not_found() -> Response {
    let body = ErrorResponse::new(404, "The requested resource was not found");
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let body = ErrorResponse::new(405, "The HTTP method is not allowed for this resource");
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}
