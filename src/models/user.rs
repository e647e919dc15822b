use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    // never serialized into responses
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: String,
}

impl User {
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
