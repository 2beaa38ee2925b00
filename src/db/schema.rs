use sqlx::SqlitePool;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    last_name TEXT NOT NULL,
    first_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    address TEXT,
    phone TEXT,
    registered_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_LISTINGS: &str = "CREATE TABLE IF NOT EXISTS listings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    service_type TEXT NOT NULL,
    price REAL NOT NULL DEFAULT 0,
    owner_id INTEGER NOT NULL REFERENCES users (id),
    available INTEGER NOT NULL DEFAULT 1,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_REQUESTS: &str = "CREATE TABLE IF NOT EXISTS requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    listing_id INTEGER NOT NULL REFERENCES listings (id),
    requester_id INTEGER NOT NULL REFERENCES users (id),
    requested_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    desired_date TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'en_attente',
    message TEXT NOT NULL
)";

/// Creates the marketplace tables when absent. Safe to run on every
/// process start; existing data is left untouched.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_LISTINGS).execute(pool).await?;
    sqlx::query(CREATE_REQUESTS).execute(pool).await?;
    Ok(())
}
