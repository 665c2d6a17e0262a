use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::directory::ActivityDirectory;
use crate::models::Activity;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<BTreeMap<String, Activity>> {
    Json(directory.list().await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<MessageResponse>, ApiError> {
    directory
        .signup(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!("Signup for {} rejected: {}", activity_name, e);
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<MessageResponse>, ApiError> {
    directory
        .unregister(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!("Unregister for {} rejected: {}", activity_name, e);
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
