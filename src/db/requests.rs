use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{NewRequest, Request, RequestStatus, RequestWithContext};

const REQUEST_COLUMNS: &str =
    "id, listing_id, requester_id, requested_at, desired_date, status, message";

#[derive(Debug, Clone)]
pub struct RequestStore {
    db: SqlitePool,
}

impl RequestStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        requester_id: i64,
        request: &NewRequest,
    ) -> Result<Request, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (listing_id, requester_id, requested_at, desired_date, status, message)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {REQUEST_COLUMNS}"
        );

        sqlx::query_as::<_, Request>(&query)
            .bind(request.listing_id)
            .bind(requester_id)
            .bind(Utc::now())
            .bind(&request.desired_date)
            .bind(RequestStatus::Pending)
            .bind(&request.message)
            .fetch_one(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {REQUEST_COLUMNS} FROM requests WHERE id = ?");

        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn set_status(&self, id: i64, status: RequestStatus) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE requests SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }

    /// Requests against one owner's listings, joined with the listing
    /// title and the requester's contact details, newest first.
    pub async fn received_for(&self, owner_id: i64) -> Result<Vec<RequestWithContext>, sqlx::Error> {
        sqlx::query_as::<_, RequestWithContext>(
            "SELECT r.id, r.listing_id, r.requester_id, r.requested_at, r.desired_date,
                    r.status, r.message,
                    l.title AS listing_title,
                    u.first_name AS contact_first_name, u.last_name AS contact_last_name,
                    u.email AS contact_email, u.phone AS contact_phone
             FROM requests r
             JOIN listings l ON r.listing_id = l.id
             JOIN users u ON r.requester_id = u.id
             WHERE l.owner_id = ?
             ORDER BY r.requested_at DESC, r.id DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await
    }

    /// Requests one user has sent, joined with the listing title and the
    /// listing owner's contact details, newest first.
    pub async fn sent_by(&self, requester_id: i64) -> Result<Vec<RequestWithContext>, sqlx::Error> {
        sqlx::query_as::<_, RequestWithContext>(
            "SELECT r.id, r.listing_id, r.requester_id, r.requested_at, r.desired_date,
                    r.status, r.message,
                    l.title AS listing_title,
                    u.first_name AS contact_first_name, u.last_name AS contact_last_name,
                    u.email AS contact_email, u.phone AS contact_phone
             FROM requests r
             JOIN listings l ON r.listing_id = l.id
             JOIN users u ON l.owner_id = u.id
             WHERE r.requester_id = ?
             ORDER BY r.requested_at DESC, r.id DESC",
        )
        .bind(requester_id)
        .fetch_all(&self.db)
        .await
    }
}
