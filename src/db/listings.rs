use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{Category, Listing, ListingWithOwner, NewListing, ServiceType};

const LISTING_COLUMNS: &str =
    "id, title, category, description, service_type, price, owner_id, available, created_at";

#[derive(Debug, Clone)]
pub struct ListingStore {
    db: SqlitePool,
}

impl ListingStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        owner_id: i64,
        listing: &NewListing,
        price: f64,
    ) -> Result<Listing, sqlx::Error> {
        let query = format!(
            "INSERT INTO listings (title, category, description, service_type, price, owner_id, available, created_at)
             VALUES (?, ?, ?, ?, ?, ?, 1, ?)
             RETURNING {LISTING_COLUMNS}"
        );

        sqlx::query_as::<_, Listing>(&query)
            .bind(&listing.title)
            .bind(listing.category)
            .bind(&listing.description)
            .bind(listing.service_type)
            .bind(price)
            .bind(owner_id)
            .bind(Utc::now())
            .fetch_one(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?");

        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    /// Available listings joined with their owner's contact details,
    /// newest first. A `None` filter matches everything.
    pub async fn search(
        &self,
        category: Option<Category>,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<ListingWithOwner>, sqlx::Error> {
        let mut query = String::from(
            "SELECT l.id, l.title, l.category, l.description, l.service_type, l.price,
                    l.owner_id, l.available, l.created_at,
                    u.first_name AS owner_first_name, u.last_name AS owner_last_name,
                    u.email AS owner_email, u.phone AS owner_phone
             FROM listings l
             JOIN users u ON l.owner_id = u.id
             WHERE l.available = 1",
        );

        if category.is_some() {
            query.push_str(" AND l.category = ?");
        }
        if service_type.is_some() {
            query.push_str(" AND l.service_type = ?");
        }
        query.push_str(" ORDER BY l.created_at DESC, l.id DESC");

        let mut listings = sqlx::query_as::<_, ListingWithOwner>(&query);
        if let Some(category) = category {
            listings = listings.bind(category);
        }
        if let Some(service_type) = service_type {
            listings = listings.bind(service_type);
        }

        listings.fetch_all(&self.db).await
    }

    /// Every listing of one owner, withdrawn ones included, newest first.
    pub async fn by_owner(&self, owner_id: i64) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE owner_id = ?
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, Listing>(&query)
            .bind(owner_id)
            .fetch_all(&self.db)
            .await
    }

    pub async fn set_availability(&self, id: i64, available: bool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE listings SET available = ? WHERE id = ?")
            .bind(available)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
