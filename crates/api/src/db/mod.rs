//! Collection gateways for the hosted document store.
//!
//! One thin module per entity type. Gateways are pass-through wrappers: no
//! caching, no retries, no transformation beyond attaching the generated id
//! on reads and the server timestamp on creates. Query ordering is delegated
//! entirely to the store.
//!
//! ## Collections
//!
//! - `artists` - read-only, ordered by name, looked up by slug
//! - `products` - read-only, ordered by name, fetched by id
//! - `tours` - read-only, ordered by date ascending
//! - `updates` - read-only, ordered by date descending
//! - `orders` - created at checkout, listed per user by createdAt descending
//! - `contacts` / `subscribers` / `submissions` - create-only form inboxes

pub mod artists;
pub mod inbox;
pub mod orders;
pub mod products;
pub mod tours;
pub mod updates;

pub use artists::ArtistGateway;
pub use inbox::InboxGateway;
pub use orders::OrderGateway;
pub use products::ProductGateway;
pub use tours::TourGateway;
pub use updates::UpdateGateway;
