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
use crate::models::Tag;

#[derive(Deserialize)]
pub struct CreateTagBody {
    #[serde(default)]
    name: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/tags", post(create_tag))
}

async fn create_tag(
    State(state): State<AppState>,
    Json(body): Json<CreateTagBody>,
) -> Result<impl IntoResponse, AppError> {
    let tag = Tag::new(body.name);

    sqlx::query("INSERT INTO tags (id, name, created_at) VALUES (?, ?, ?)")
        .bind(&tag.id)
        .bind(&tag.name)
        .bind(&tag.created_at)
        .execute(&state.db)
        .await
        .map_err(AppError::Persistence)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Tag created", "tag": tag })),
    ))
}
