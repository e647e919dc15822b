use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use sqlx::FromRow;

use crate::AppState;
use crate::error::AppError;
use crate::models::{Blog, User};
use crate::upload;

/// Fields collected from the blog-creation form.
#[derive(Default)]
struct BlogForm {
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
    tags: Vec<String>,
    categories: Vec<String>,
    image: Option<(String, Vec<u8>)>,
}

/// Tags and categories arrive either as repeated form fields (already a
/// list) or as one comma-delimited string. A list passes through untouched;
/// a single string is split on commas with each piece trimmed, keeping
/// empty pieces from consecutive delimiters.
fn normalize_list(values: Vec<String>) -> Vec<String> {
    match values.len() {
        0 => Vec::new(),
        1 => values[0].split(',').map(|s| s.trim().to_string()).collect(),
        _ => values,
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/blogs", post(create_blog))
        .route("/api/blogs", get(list_blogs))
}

async fn read_blog_form(mut multipart: Multipart) -> Result<BlogForm, AppError> {
    let mut form = BlogForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => form.title = Some(field.text().await?),
            "content" => form.content = Some(field.text().await?),
            "author" => form.author = Some(field.text().await?),
            "tags" => form.tags.push(field.text().await?),
            "categories" => form.categories.push(field.text().await?),
            "image" => {
                if form.image.is_none() {
                    let filename = field.file_name().unwrap_or("").to_string();
                    let data = field.bytes().await?;
                    form.image = Some((filename, data.to_vec()));
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn create_blog(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_blog_form(multipart).await?;

    let title = form
        .title
        .filter(|s| !s.is_empty())
        .ok_or(AppError::Validation("Title is required"))?;
    let content = form
        .content
        .filter(|s| !s.is_empty())
        .ok_or(AppError::Validation("Content is required"))?;
    let author = form
        .author
        .filter(|s| !s.is_empty())
        .ok_or(AppError::Validation("Author is required"))?;

    let image = match form.image {
        Some((filename, data)) => {
            upload::save_image(&state.upload_dir, &filename, &data).await?
        }
        None => String::new(),
    };

    let blog = Blog::new(
        title,
        content,
        author,
        image,
        normalize_list(form.tags),
        normalize_list(form.categories),
    );

    sqlx::query(
        r#"
        INSERT INTO blogs (id, title, content, author, image, tags, categories, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&blog.id)
    .bind(&blog.title)
    .bind(&blog.content)
    .bind(&blog.author)
    .bind(&blog.image)
    .bind(serde_json::to_string(&blog.tags).unwrap_or_default())
    .bind(serde_json::to_string(&blog.categories).unwrap_or_default())
    .bind(&blog.created_at)
    .execute(&state.db)
    .await
    .map_err(AppError::Persistence)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Blog created", "blog": blog })),
    ))
}

/// Blog row joined with its author for the listing endpoint.
#[derive(FromRow)]
struct BlogWithAuthor {
    // Blog fields; list columns are still JSON text here
    id: String,
    title: String,
    content: String,
    image: String,
    tags: String,
    categories: String,
    created_at: String,
    // Author fields
    author_id: String,
    author_username: String,
    author_email: String,
    author_password: String,
    author_created_at: String,
}

#[derive(Serialize)]
struct BlogView {
    id: String,
    title: String,
    content: String,
    author: User,
    image: String,
    tags: Vec<String>,
    categories: Vec<String>,
    created_at: String,
}

impl BlogWithAuthor {
    fn into_view(self) -> BlogView {
        BlogView {
            id: self.id,
            title: self.title,
            content: self.content,
            author: User {
                id: self.author_id,
                username: self.author_username,
                email: self.author_email,
                password: self.author_password,
                created_at: self.author_created_at,
            },
            image: self.image,
            tags: serde_json::from_str(&self.tags).unwrap_or_default(),
            categories: serde_json::from_str(&self.categories).unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

async fn list_blogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<BlogWithAuthor> = sqlx::query_as(
        r#"
        SELECT b.id, b.title, b.content, b.image, b.tags, b.categories, b.created_at,
               u.id AS author_id, u.username AS author_username, u.email AS author_email,
               u.password AS author_password, u.created_at AS author_created_at
        FROM blogs b
        JOIN users u ON u.id = b.author
        ORDER BY b.created_at
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(AppError::Query)?;

    let blogs: Vec<BlogView> = rows.into_iter().map(BlogWithAuthor::into_view).collect();

    Ok(Json(blogs))
}
