use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use crate::error::AppError;
use crate::models::User;

#[derive(Deserialize)]
pub struct RegisterBody {
    // absent fields fall through to the schema's non-empty checks
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/users/register", post(register))
}

async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = User::new(body.username, body.email, body.password);

    sqlx::query(
        "INSERT INTO users (id, username, email, password, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password)
    .bind(&user.created_at)
    .execute(&state.db)
    .await
    .map_err(AppError::Persistence)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered", "user": user })),
    ))
}
