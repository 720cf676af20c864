use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::RegistryError;

impl RegistryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistryError::AlreadyRegistered { .. }
            | RegistryError::NotRegistered { .. }
            | RegistryError::Full { .. }
            | RegistryError::InvalidEmail => StatusCode::BAD_REQUEST,
        }
    }
}

// Error body is `{"detail": "..."}`; the front-end shows `detail` verbatim.
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
