// Marketplace workflow services

pub mod account_service;
pub mod listing_service;
pub mod request_service;

pub use account_service::AccountService;
pub use listing_service::ListingService;
pub use request_service::RequestService;
