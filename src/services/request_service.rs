use sqlx::SqlitePool;
use tracing::info;

use crate::db::{ListingStore, RequestStore};
use crate::error::CoreError;
use crate::models::{NewRequest, RequestDecision, RequestStatus, RequestWithContext};

/// Booking requests and their pending → accepted/declined lifecycle.
#[derive(Debug, Clone)]
pub struct RequestService {
    requests: RequestStore,
    listings: ListingStore,
}

impl RequestService {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            requests: RequestStore::new(db.clone()),
            listings: ListingStore::new(db),
        }
    }

    /// Files a pending request against an existing listing and returns its
    /// id. Nothing stops a requester from asking twice, or owners from
    /// requesting their own listing.
    pub async fn create(&self, requester_id: i64, request: NewRequest) -> Result<i64, CoreError> {
        if self.listings.find_by_id(request.listing_id).await?.is_none() {
            return Err(CoreError::ListingNotFound);
        }

        let created = self.requests.insert(requester_id, &request).await?;
        info!(
            request_id = created.id,
            listing_id = created.listing_id,
            requester_id,
            "booking request filed"
        );
        Ok(created.id)
    }

    /// Settles a pending request. Only the owner of the targeted listing
    /// may decide, and a request already accepted or declined stays that
    /// way.
    pub async fn decide(
        &self,
        actor_id: i64,
        request_id: i64,
        decision: RequestDecision,
    ) -> Result<(), CoreError> {
        let request = match self.requests.find_by_id(request_id).await? {
            Some(request) => request,
            None => return Err(CoreError::RequestNotFound),
        };

        let listing = match self.listings.find_by_id(request.listing_id).await? {
            Some(listing) => listing,
            None => return Err(CoreError::ListingNotFound),
        };

        if listing.owner_id != actor_id {
            return Err(CoreError::NotOwner);
        }
        if request.status != RequestStatus::Pending {
            return Err(CoreError::InvalidTransition);
        }

        self.requests.set_status(request_id, decision.status()).await?;
        info!(request_id, ?decision, "request settled");
        Ok(())
    }

    /// Requests received against the owner's listings, newest first, with
    /// the requester's contact details.
    pub async fn received_for(&self, owner_id: i64) -> Result<Vec<RequestWithContext>, CoreError> {
        Ok(self.requests.received_for(owner_id).await?)
    }

    /// Requests the user has sent, newest first, with the listing owner's
    /// contact details.
    pub async fn sent_by(&self, requester_id: i64) -> Result<Vec<RequestWithContext>, CoreError> {
        Ok(self.requests.sent_by(requester_id).await?)
    }
}
