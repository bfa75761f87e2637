use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::file::File;

// id, name, type, size and url are required (serde rejects a body missing
// any of them); the values are passed through opaque. UID and upload_time
// are optional.
#[derive(Deserialize)]
pub struct NewFile {
    id: i32,
    #[serde(rename = "UID", default)]
    uid: Option<i32>,
    name: String,
    #[serde(rename = "type")]
    file_type: String,
    size: i64,
    url: String,
    // Application clock is authoritative when omitted.
    #[serde(default)]
    upload_time: Option<DateTime<Utc>>,
}

/// PUT takes the id from the path; omitting `upload_time` overwrites the
/// stored value with the current time, same as the full-row semantics of
/// Create.
#[derive(Deserialize)]
pub struct FileUpdate {
    #[serde(rename = "UID", default)]
    uid: Option<i32>,
    name: String,
    #[serde(rename = "type")]
    file_type: String,
    size: i64,
    url: String,
    #[serde(default)]
    upload_time: Option<DateTime<Utc>>,
}

pub async fn get_files(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let files = sqlx::query_as::<_, File>(
        r#"SELECT id, "UID", name, type, size, url, upload_time FROM "File""#,
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(files))
}

pub async fn get_file(
    pool: web::Data<PgPool>,
    file_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let file_id = file_id.into_inner();

    let file = sqlx::query_as::<_, File>(
        r#"SELECT id, "UID", name, type, size, url, upload_time FROM "File" WHERE id = $1"#,
    )
    .bind(file_id)
    .fetch_optional(&**pool)
    .await?;

    match file {
        Some(file) => Ok(HttpResponse::Ok().json(file)),
        None => Err(AppError::NotFound("File not found".to_string())),
    }
}

pub async fn add_file(
    pool: web::Data<PgPool>,
    new_file: web::Json<NewFile>,
) -> Result<HttpResponse, AppError> {
    let upload_time = new_file.upload_time.unwrap_or_else(Utc::now);

    sqlx::query(
        r#"INSERT INTO "File" (id, "UID", name, type, size, url, upload_time) VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
    )
    .bind(new_file.id)
    .bind(new_file.uid)
    .bind(&new_file.name)
    .bind(&new_file.file_type)
    .bind(new_file.size)
    .bind(&new_file.url)
    .bind(upload_time)
    .execute(&**pool)
    .await
    .map_err(|err| match AppError::from(err) {
        AppError::Conflict(_) => AppError::Conflict(format!("File with id {} already exists", new_file.id)),
        other => other,
    })?;

    Ok(HttpResponse::Created().json(json!({
        "message": "File added successfully",
    })))
}

pub async fn update_file(
    pool: web::Data<PgPool>,
    file_id: web::Path<i32>,
    updates: web::Json<FileUpdate>,
) -> Result<HttpResponse, AppError> {
    let file_id = file_id.into_inner();
    let upload_time = updates.upload_time.unwrap_or_else(Utc::now);

    let result = sqlx::query(
        r#"UPDATE "File" SET "UID" = $1, name = $2, type = $3, size = $4, url = $5, upload_time = $6 WHERE id = $7"#,
    )
    .bind(updates.uid)
    .bind(&updates.name)
    .bind(&updates.file_type)
    .bind(updates.size)
    .bind(&updates.url)
    .bind(upload_time)
    .bind(file_id)
    .execute(&**pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("File not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "File updated successfully",
    })))
}

pub async fn delete_file(
    pool: web::Data<PgPool>,
    file_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let file_id = file_id.into_inner();

    let result = sqlx::query(r#"DELETE FROM "File" WHERE id = $1"#)
        .bind(file_id)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("File not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "File deleted successfully",
    })))
}
