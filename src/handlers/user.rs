use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;

// All four fields are required; serde rejects a body missing any of them
// before a statement is issued. The values themselves are opaque strings,
// Password_hash included (callers pre-hash).
#[derive(Deserialize)]
pub struct NewUser {
    #[serde(rename = "UID")]
    uid: i32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Password_hash")]
    password_hash: String,
}

/// PUT takes the UID from the path, never the body.
#[derive(Deserialize)]
pub struct UserUpdate {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Password_hash")]
    password_hash: String,
}

pub async fn get_users(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    // No ORDER BY: row order is whatever the storage engine yields.
    let users = sqlx::query_as::<_, User>(
        r#"SELECT "UID", "Name", "Email", "Password_hash" FROM public."User""#,
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(users))
}

pub async fn add_user(
    pool: web::Data<PgPool>,
    new_user: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
    sqlx::query(
        r#"INSERT INTO public."User" ("UID", "Name", "Email", "Password_hash") VALUES ($1, $2, $3, $4)"#,
    )
    .bind(new_user.uid)
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .execute(&**pool)
    .await
    .map_err(|err| match AppError::from(err) {
        AppError::Conflict(_) => AppError::Conflict(format!("User with UID {} already exists", new_user.uid)),
        other => other,
    })?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User added",
    })))
}

pub async fn update_user(
    pool: web::Data<PgPool>,
    uid: web::Path<i32>,
    updates: web::Json<UserUpdate>,
) -> Result<HttpResponse, AppError> {
    let uid = uid.into_inner();

    let result = sqlx::query(
        r#"UPDATE public."User" SET "Name" = $1, "Email" = $2, "Password_hash" = $3 WHERE "UID" = $4"#,
    )
    .bind(&updates.name)
    .bind(&updates.email)
    .bind(&updates.password_hash)
    .bind(uid)
    .execute(&**pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "User updated",
    })))
}

pub async fn delete_user(
    pool: web::Data<PgPool>,
    uid: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let uid = uid.into_inner();

    let result = sqlx::query(r#"DELETE FROM public."User" WHERE "UID" = $1"#)
        .bind(uid)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "User deleted",
    })))
}
