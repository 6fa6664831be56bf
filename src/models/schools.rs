use serde::Serialize;

// Row as stored in the `schools` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SchoolRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

// Listing projection: the school plus its distance (km) from the query point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolDistanceRow {
    #[serde(flatten)]
    pub school: SchoolRow,
    pub distance: f64,
}
