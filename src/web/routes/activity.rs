use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::ActivityRegistry;
use crate::error::RegistryError;
use crate::services::signup_service::{self, SignupReceipt};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<SignupReceipt>, RegistryError> {
    signup_service::sign_up(&registry, &activity_name, &query.email).map(Json)
}

// Serves both `/unregister` and the `/participants` path the front-end calls.
pub async fn activity_unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<SignupReceipt>, RegistryError> {
    signup_service::unregister(&registry, &activity_name, &query.email).map(Json)
}
