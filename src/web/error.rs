use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::school_service::SchoolError;

impl IntoResponse for SchoolError {
    fn into_response(self) -> Response {
        match self {
            SchoolError::Validation(errors) => {
                tracing::warn!(count = errors.len(), "school_validation_failed");
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            SchoolError::InvalidReferencePoint => {
                tracing::warn!("school_list_invalid_reference_point");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": self.to_string() })),
                )
                    .into_response()
            }
            SchoolError::Conflict => (
                StatusCode::CONFLICT,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
            SchoolError::Store(e) => {
                tracing::error!(error = %e, "school_store_failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Database error", "error": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
