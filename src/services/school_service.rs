use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::database::school_repo::NewSchool;
use crate::database::school_store::SchoolStore;
use crate::models::SchoolDistanceRow;
use crate::services::geo::haversine_km;
use crate::services::school_validation::{parse_float_prefix, parse_school_payload, FieldError};

#[derive(Debug, Error)]
pub enum SchoolError {
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Valid latitude and longitude are required")]
    InvalidReferencePoint,

    #[error("A school with the same name, address, latitude, and longitude already exists")]
    Conflict,

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Result of a successful create: the assigned id plus the fields as submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedSchool {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: Value,
    pub longitude: Value,
}

#[derive(Clone)]
pub struct SchoolService {
    store: Arc<dyn SchoolStore>,
}

impl SchoolService {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }

    /// Validates the payload, rejects duplicates on `(name, latitude, longitude)` and inserts.
    ///
    /// The duplicate lookup and the insert are two separate store calls, so
    /// concurrent creators with the same key can both succeed.
    pub async fn create_school(&self, payload: &Value) -> Result<CreatedSchool, SchoolError> {
        let submission = parse_school_payload(payload).map_err(SchoolError::Validation)?;

        let existing = self
            .store
            .find_by_key(submission.name, submission.latitude, submission.longitude)
            .await?;
        if let Some(duplicate) = existing.first() {
            warn!(
                existing_id = duplicate.id,
                name = %submission.name,
                "school_create_conflict"
            );
            return Err(SchoolError::Conflict);
        }

        let id = self
            .store
            .insert_school(NewSchool {
                name: submission.name,
                address: submission.address,
                latitude: submission.latitude,
                longitude: submission.longitude,
            })
            .await?;

        info!(id, name = %submission.name, "school_created");

        Ok(CreatedSchool {
            id,
            name: submission.name.to_string(),
            address: submission.address.to_string(),
            latitude: submission.raw_latitude.clone(),
            longitude: submission.raw_longitude.clone(),
        })
    }

    /// Every school annotated with its distance from the reference point, nearest first.
    pub async fn list_schools_by_distance(
        &self,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Vec<SchoolDistanceRow>, SchoolError> {
        let (Some(lat0), Some(lon0)) = (reference_coordinate(latitude), reference_coordinate(longitude))
        else {
            return Err(SchoolError::InvalidReferencePoint);
        };

        let schools = self.store.list_schools().await?;
        let mut rows: Vec<SchoolDistanceRow> = schools
            .into_iter()
            .map(|school| {
                let distance = haversine_km(lat0, lon0, school.latitude, school.longitude);
                SchoolDistanceRow { school, distance }
            })
            .collect();

        // Stable: equal distances keep retrieval order.
        rows.sort_by(|a, b| compare_distance(a.distance, b.distance));

        Ok(rows)
    }
}

// Total order: ascending, with NaN (from infinite coordinates) after every number.
fn compare_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

fn reference_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.filter(|s| !s.is_empty()).and_then(parse_float_prefix)
}
