// Persistence layer: the only place SQL statements are issued.

pub mod listings;
pub mod requests;
pub mod schema;
pub mod users;

pub use listings::ListingStore;
pub use requests::RequestStore;
pub use schema::init_schema;
pub use users::UserStore;
