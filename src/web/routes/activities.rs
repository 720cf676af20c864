use axum::{extract::State, Json};

use crate::database::ActivityRegistry;
use crate::services::activities_service::{self, ActivitiesPage};

pub async fn activities_handler(State(registry): State<ActivityRegistry>) -> Json<ActivitiesPage> {
    Json(activities_service::list_activities(&registry))
}
