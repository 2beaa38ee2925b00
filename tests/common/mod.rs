// Shared fixtures for the integration tests. Each test gets its own
// single-connection in-memory database so nothing leaks between tests.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use voisins_core::db;
use voisins_core::models::{Category, NewListing, NewUser, ServiceType};
use voisins_core::services::AccountService;

pub const PASSWORD: &str = "motdepasse";

pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    // One connection keeps the in-memory database alive and shared.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    db::init_schema(&pool).await.expect("schema init");
    pool
}

pub fn new_user(first_name: &str, last_name: &str, email: &str, phone: Option<&str>) -> NewUser {
    NewUser {
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        address: Some("12 rue des Lilas".to_string()),
        phone: phone.map(str::to_string),
    }
}

pub async fn register(pool: &SqlitePool, email: &str, phone: Option<&str>) -> i64 {
    AccountService::new(pool.clone())
        .register(new_user("Jean", "Dupont", email, phone))
        .await
        .expect("registration")
}

pub fn new_listing(
    title: &str,
    category: Category,
    service_type: ServiceType,
    price: Option<f64>,
) -> NewListing {
    NewListing {
        title: title.to_string(),
        category,
        description: format!("Description de {title}"),
        service_type,
        price,
    }
}
