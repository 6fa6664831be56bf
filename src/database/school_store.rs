use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::school_repo::{self, NewSchool};
use crate::models::SchoolRow;

/// Persistence collaborator for the school registry.
///
/// The registry only ever reads everything, looks up a duplicate key, or
/// inserts; implementations do not need to be transactional.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// All schools in retrieval order (ascending id).
    async fn list_schools(&self) -> sqlx::Result<Vec<SchoolRow>>;

    /// Schools whose `(name, latitude, longitude)` match exactly.
    async fn find_by_key(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> sqlx::Result<Vec<SchoolRow>>;

    /// Inserts a school and returns its assigned id.
    async fn insert_school(&self, school: NewSchool<'_>) -> sqlx::Result<i64>;
}

#[derive(Debug, Clone)]
pub struct SqliteSchoolStore {
    pool: SqlitePool,
}

impl SqliteSchoolStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolStore for SqliteSchoolStore {
    async fn list_schools(&self) -> sqlx::Result<Vec<SchoolRow>> {
        school_repo::list_schools(&self.pool).await
    }

    async fn find_by_key(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> sqlx::Result<Vec<SchoolRow>> {
        school_repo::find_schools_by_key(&self.pool, name, latitude, longitude).await
    }

    async fn insert_school(&self, school: NewSchool<'_>) -> sqlx::Result<i64> {
        school_repo::insert_school(&self.pool, school).await
    }
}
