use axum::{http::header, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub build: &'static str,
}

pub async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        build: option_env!("MERGINGTON_BUILD_ID").unwrap_or("dev"),
    };

    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}
