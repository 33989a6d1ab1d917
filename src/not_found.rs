use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The fallback for routes that do not exist: an empty 404 response.
pub async fn get_404_not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
