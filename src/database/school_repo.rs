use sqlx::SqlitePool;

use crate::models::SchoolRow;

pub struct NewSchool<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

const SQL_CREATE_SCHOOLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schools (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  address TEXT NOT NULL,
  latitude REAL NOT NULL,
  longitude REAL NOT NULL
)
"#;

pub async fn ensure_schools_table(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_SCHOOLS_TABLE).execute(pool).await?;
    Ok(())
}

const SQL_LIST_SCHOOLS: &str = r#"
SELECT
  id,
  name,
  address,
  latitude,
  longitude
FROM schools
ORDER BY id ASC
"#;

pub async fn list_schools(pool: &SqlitePool) -> sqlx::Result<Vec<SchoolRow>> {
    sqlx::query_as::<_, SchoolRow>(SQL_LIST_SCHOOLS)
        .fetch_all(pool)
        .await
}

// Exact match on the duplicate key; address is deliberately not part of it.
const SQL_FIND_SCHOOLS_BY_KEY: &str = r#"
SELECT
  id,
  name,
  address,
  latitude,
  longitude
FROM schools
WHERE name = ?1
  AND latitude = ?2
  AND longitude = ?3
ORDER BY id ASC
"#;

pub async fn find_schools_by_key(
    pool: &SqlitePool,
    name: &str,
    latitude: f64,
    longitude: f64,
) -> sqlx::Result<Vec<SchoolRow>> {
    sqlx::query_as::<_, SchoolRow>(SQL_FIND_SCHOOLS_BY_KEY)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .fetch_all(pool)
        .await
}

const SQL_INSERT_SCHOOL: &str = r#"
INSERT INTO schools (
  name,
  address,
  latitude,
  longitude
) VALUES (?1, ?2, ?3, ?4)
"#;

pub async fn insert_school(pool: &SqlitePool, school: NewSchool<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_SCHOOL)
        .bind(school.name)
        .bind(school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}
