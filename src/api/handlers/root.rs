use axum::{http::StatusCode, response::IntoResponse};

/// Body served on `/` by both services
pub const GREETING: &str = "DevOps Toolchain Application";

/// GET /
pub async fn root_handler() -> impl IntoResponse {
    (StatusCode::OK, GREETING)
}
