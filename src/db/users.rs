use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{NewUser, ProfileUpdate, User};

const USER_COLUMNS: &str =
    "id, last_name, first_name, email, password_hash, address, phone, registered_at";

#[derive(Debug, Clone)]
pub struct UserStore {
    db: SqlitePool,
}

impl UserStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn insert(&self, new_user: &NewUser, password_hash: &str) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (last_name, first_name, email, password_hash, address, phone, registered_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(&new_user.last_name)
            .bind(&new_user.first_name)
            .bind(&new_user.email)
            .bind(password_hash)
            .bind(&new_user.address)
            .bind(&new_user.phone)
            .bind(Utc::now())
            .fetch_one(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");

        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.db)
            .await
    }

    /// Exact match on the (email, phone) pair on file. A user without a
    /// stored phone number never matches.
    pub async fn find_by_identity(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ? AND phone = ?");

        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(phone)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn update_password_hash(
        &self,
        id: i64,
        password_hash: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }

    /// Updates the mutable profile fields. Email is deliberately not part
    /// of this statement.
    pub async fn update_profile(
        &self,
        id: i64,
        update: &ProfileUpdate,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET last_name = ?, first_name = ?, address = ?, phone = ?
             WHERE id = ?",
        )
        .bind(&update.last_name)
        .bind(&update.first_name)
        .bind(&update.address)
        .bind(&update.phone)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected())
    }
}
