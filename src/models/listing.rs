use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Service categories offered on the platform. Stored and serialized under
/// the labels shown to neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Category {
    #[serde(rename = "Jardinage")]
    #[sqlx(rename = "Jardinage")]
    Gardening,
    #[serde(rename = "Bricolage")]
    #[sqlx(rename = "Bricolage")]
    DiyRepairs,
    #[serde(rename = "Courses")]
    #[sqlx(rename = "Courses")]
    Errands,
    #[serde(rename = "Garde d'enfants")]
    #[sqlx(rename = "Garde d'enfants")]
    Childcare,
    #[serde(rename = "Garde d'animaux")]
    #[sqlx(rename = "Garde d'animaux")]
    PetSitting,
    #[serde(rename = "Aide aux devoirs")]
    #[sqlx(rename = "Aide aux devoirs")]
    HomeworkHelp,
    #[serde(rename = "Covoiturage")]
    #[sqlx(rename = "Covoiturage")]
    Carpooling,
    #[serde(rename = "Aide à domicile")]
    #[sqlx(rename = "Aide à domicile")]
    HomeCare,
    #[serde(rename = "Autre")]
    #[sqlx(rename = "Autre")]
    Other,
}

impl Category {
    /// Every category, in the order presented to neighbours.
    pub const ALL: [Category; 9] = [
        Category::Gardening,
        Category::DiyRepairs,
        Category::Errands,
        Category::Childcare,
        Category::PetSitting,
        Category::HomeworkHelp,
        Category::Carpooling,
        Category::HomeCare,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gardening => "Jardinage",
            Category::DiyRepairs => "Bricolage",
            Category::Errands => "Courses",
            Category::Childcare => "Garde d'enfants",
            Category::PetSitting => "Garde d'animaux",
            Category::HomeworkHelp => "Aide aux devoirs",
            Category::Carpooling => "Covoiturage",
            Category::HomeCare => "Aide à domicile",
            Category::Other => "Autre",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// How a listing is compensated, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ServiceType {
    #[serde(rename = "Service gratuit")]
    #[sqlx(rename = "Service gratuit")]
    Free,
    #[serde(rename = "Location payante")]
    #[sqlx(rename = "Location payante")]
    Rental,
    #[serde(rename = "Service rémunéré")]
    #[sqlx(rename = "Service rémunéré")]
    Paid,
    #[serde(rename = "Échange")]
    #[sqlx(rename = "Échange")]
    Exchange,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Free,
        ServiceType::Rental,
        ServiceType::Paid,
        ServiceType::Exchange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Free => "Service gratuit",
            ServiceType::Rental => "Location payante",
            ServiceType::Paid => "Service rémunéré",
            ServiceType::Exchange => "Échange",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        ServiceType::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Whether a price is meaningful for this type.
    pub fn is_paid(&self) -> bool {
        matches!(self, ServiceType::Rental | ServiceType::Paid)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub service_type: ServiceType,
    pub price: f64,
    pub owner_id: i64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub service_type: ServiceType,
    /// Ignored for free and exchange listings; those are stored at 0.
    pub price: Option<f64>,
}

/// Search-result row: a listing joined with its owner's contact details.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ListingWithOwner {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub service_type: ServiceType,
    pub price: f64,
    pub owner_id: i64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
}
