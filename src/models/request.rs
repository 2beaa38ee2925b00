use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle of a booking request: it starts pending and the listing owner
/// settles it one way or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum RequestStatus {
    #[serde(rename = "en_attente")]
    #[sqlx(rename = "en_attente")]
    Pending,
    #[serde(rename = "acceptee")]
    #[sqlx(rename = "acceptee")]
    Accepted,
    #[serde(rename = "refusee")]
    #[sqlx(rename = "refusee")]
    Declined,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "en_attente",
            RequestStatus::Accepted => "acceptee",
            RequestStatus::Declined => "refusee",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "en_attente" => Some(RequestStatus::Pending),
            "acceptee" => Some(RequestStatus::Accepted),
            "refusee" => Some(RequestStatus::Declined),
            _ => None,
        }
    }
}

/// The owner's answer to a pending request. Keeping this separate from
/// [`RequestStatus`] makes "set it back to pending" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestDecision {
    Accept,
    Decline,
}

impl RequestDecision {
    pub fn status(self) -> RequestStatus {
        match self {
            RequestDecision::Accept => RequestStatus::Accepted,
            RequestDecision::Decline => RequestStatus::Declined,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Request {
    pub id: i64,
    pub listing_id: i64,
    pub requester_id: i64,
    pub requested_at: DateTime<Utc>,
    pub desired_date: String,
    pub status: RequestStatus,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRequest {
    pub listing_id: i64,
    /// Free-form date as typed by the requester.
    pub desired_date: String,
    pub message: String,
}

/// A request joined with the listing title and the other party's contact
/// details: the requester's when listed by the owner, the owner's when
/// listed by the requester.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RequestWithContext {
    pub id: i64,
    pub listing_id: i64,
    pub requester_id: i64,
    pub requested_at: DateTime<Utc>,
    pub desired_date: String,
    pub status: RequestStatus,
    pub message: String,
    pub listing_title: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}
