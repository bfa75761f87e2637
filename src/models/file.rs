use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `"File"`. `UID` is an unvalidated owner reference and may be null;
/// `upload_time` is nullable in the table even though this service always
/// writes one.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct File {
    pub id: i32,
    #[serde(rename = "UID")]
    #[sqlx(rename = "UID")]
    pub uid: Option<i32>,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub file_type: String,
    pub size: i64,
    pub url: String,
    pub upload_time: Option<DateTime<Utc>>,
}
