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
use crate::models::Category;

#[derive(Deserialize)]
pub struct CreateCategoryBody {
    #[serde(default)]
    name: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/categories", post(create_category))
}

async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryBody>,
) -> Result<impl IntoResponse, AppError> {
    let category = Category::new(body.name);

    sqlx::query("INSERT INTO categories (id, name, created_at) VALUES (?, ?, ?)")
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.created_at)
        .execute(&state.db)
        .await
        .map_err(AppError::Persistence)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Category created", "category": category })),
    ))
}
