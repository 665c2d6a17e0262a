use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::directory::DirectoryError;

// Wire shape of every error: {"detail": "..."}. Clients match on the
// detail substrings, so the texts come verbatim from DirectoryError.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        let status = match err {
            DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
            DirectoryError::AlreadySignedUp
            | DirectoryError::ActivityFull
            | DirectoryError::NotRegistered => StatusCode::BAD_REQUEST,
        };

        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}
