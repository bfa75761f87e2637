use serde::{Deserialize, Serialize};

/// Row of `public."User"`. The quoted column names and the JSON field names
/// are identical, so serde renames track the table exactly.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(rename = "UID")]
    #[sqlx(rename = "UID")]
    pub uid: i32,
    #[serde(rename = "Name")]
    #[sqlx(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    #[sqlx(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password_hash")]
    #[sqlx(rename = "Password_hash")]
    pub password_hash: String,
}
