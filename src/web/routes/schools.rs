use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::models::SchoolDistanceRow;
use crate::services::school_service::{CreatedSchool, SchoolError, SchoolService};
use crate::web::extract::JsonPayload;

#[derive(Debug, Serialize)]
pub struct CreatedSchoolResponse {
    #[serde(flatten)]
    school: CreatedSchool,
    message: &'static str,
}

pub async fn create_school_handler(
    State(service): State<SchoolService>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<CreatedSchoolResponse>), SchoolError> {
    let school = service.create_school(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedSchoolResponse {
            school,
            message: "School added successfully",
        }),
    ))
}

pub async fn list_schools_handler(
    State(service): State<SchoolService>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<SchoolDistanceRow>>, SchoolError> {
    let Query(pairs) = query.map_err(|e| {
        tracing::warn!(error = %e, "school_list_query_rejected");
        SchoolError::InvalidReferencePoint
    })?;

    let latitude = query_param(&pairs, "latitude");
    let longitude = query_param(&pairs, "longitude");
    service
        .list_schools_by_distance(latitude.as_deref(), longitude.as_deref())
        .await
        .map(Json)
}

// A repeated key reads as its values joined with commas (`?a=1&a=2` is "1,2").
fn query_param(pairs: &[(String, String)], key: &str) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect();
    (!values.is_empty()).then(|| values.join(","))
}
