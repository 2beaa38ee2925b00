use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::db::UserStore;
use crate::error::CoreError;
use crate::models::{NewUser, ProfileUpdate, User};

/// Registration, login, password reset and profile edition.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: UserStore,
}

impl AccountService {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            users: UserStore::new(db),
        }
    }

    /// Registers a new user and returns their id.
    ///
    /// Password policy (minimum length, confirmation match) is the
    /// caller's pre-check; only email uniqueness is guarded here.
    pub async fn register(&self, new_user: NewUser) -> Result<i64, CoreError> {
        if self.users.find_by_email(&new_user.email).await?.is_some() {
            return Err(CoreError::DuplicateEmail);
        }

        let password_hash = hash_password(&new_user.password)?;
        let user = self
            .users
            .insert(&new_user, &password_hash)
            .await
            .map_err(CoreError::from_storage)?;

        info!(user_id = user.id, "new user registered");
        Ok(user.id)
    }

    /// Verifies the credentials and returns the full user record.
    ///
    /// An unknown email and a wrong password both come back as
    /// [`CoreError::InvalidCredentials`].
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, CoreError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(CoreError::InvalidCredentials),
        };

        if !verify_password(password, &user.password_hash) {
            return Err(CoreError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Overwrites the credential after the caller proves their identity by
    /// supplying the exact email and phone number on file.
    pub async fn reset_password(
        &self,
        email: &str,
        phone: &str,
        new_password: &str,
    ) -> Result<(), CoreError> {
        let user = match self.users.find_by_identity(email, phone).await? {
            Some(user) => user,
            None => {
                warn!("password reset rejected: identity proof failed");
                return Err(CoreError::IdentityNotRecognized);
            }
        };

        let password_hash = hash_password(new_password)?;
        self.users.update_password_hash(user.id, &password_hash).await?;

        info!(user_id = user.id, "password reset");
        Ok(())
    }

    /// Updates names, address and phone. The email carried by the payload
    /// is ignored; the email on file stays authoritative for login.
    pub async fn update_profile(
        &self,
        user_id: i64,
        update: ProfileUpdate,
    ) -> Result<(), CoreError> {
        let rows = self
            .users
            .update_profile(user_id, &update)
            .await
            .map_err(CoreError::from_storage)?;

        if rows == 0 {
            return Err(CoreError::UserNotFound);
        }

        Ok(())
    }

    pub async fn profile(&self, user_id: i64) -> Result<Option<User>, CoreError> {
        Ok(self.users.find_by_id(user_id).await?)
    }
}
