use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Profile edition payload. The email field is accepted for form
/// round-tripping but the email on file is never changed through this
/// path; credentials go through the password-reset flow instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}
