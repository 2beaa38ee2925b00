use sqlx::SqlitePool;
use tracing::info;

use crate::db::{ListingStore, UserStore};
use crate::error::CoreError;
use crate::models::{Category, Listing, ListingWithOwner, NewListing, ServiceType};

/// Publication and discovery of service/equipment listings.
#[derive(Debug, Clone)]
pub struct ListingService {
    listings: ListingStore,
    users: UserStore,
}

impl ListingService {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            listings: ListingStore::new(db.clone()),
            users: UserStore::new(db),
        }
    }

    /// Publishes a listing on behalf of an existing user and returns its
    /// id. Free and exchange listings are stored with a price of 0
    /// whatever the payload says.
    pub async fn create(&self, owner_id: i64, listing: NewListing) -> Result<i64, CoreError> {
        if self.users.find_by_id(owner_id).await?.is_none() {
            return Err(CoreError::UserNotFound);
        }

        let price = if listing.service_type.is_paid() {
            listing.price.unwrap_or(0.0)
        } else {
            0.0
        };

        let created = self.listings.insert(owner_id, &listing, price).await?;
        info!(listing_id = created.id, owner_id, "listing published");
        Ok(created.id)
    }

    /// Snapshot of the available listings, newest first, each carrying the
    /// owner's contact details. `None` on either filter disables it.
    pub async fn search(
        &self,
        category: Option<Category>,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<ListingWithOwner>, CoreError> {
        Ok(self.listings.search(category, service_type).await?)
    }

    /// All listings of one owner, withdrawn ones included, newest first.
    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Listing>, CoreError> {
        Ok(self.listings.by_owner(owner_id).await?)
    }

    /// Shows or withdraws a listing. Idempotent; only the owner may call
    /// it.
    pub async fn set_availability(
        &self,
        actor_id: i64,
        listing_id: i64,
        available: bool,
    ) -> Result<(), CoreError> {
        let listing = match self.listings.find_by_id(listing_id).await? {
            Some(listing) => listing,
            None => return Err(CoreError::ListingNotFound),
        };

        if listing.owner_id != actor_id {
            return Err(CoreError::NotOwner);
        }

        self.listings.set_availability(listing_id, available).await?;
        Ok(())
    }
}
