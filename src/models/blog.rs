use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published post. `author` holds the id of the user who wrote it;
/// `tags` and `categories` are plain string lists, not references to the
/// standalone tag/category tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub created_at: String,
}

impl Blog {
    pub fn new(
        title: String,
        content: String,
        author: String,
        image: String,
        tags: Vec<String>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            author,
            image,
            tags,
            categories,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
