//! HTTP route handlers for the site API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Health check
//!
//! # Catalog (read-only)
//! GET  /artists         - All artists, ordered by name
//! GET  /artists/{slug}  - Single artist by slug
//! GET  /products        - All products, ordered by name
//! GET  /products/{id}   - Single product by id
//! GET  /tours           - Tour dates, soonest first
//! GET  /updates         - News posts, newest first
//!
//! # Forms
//! POST /contact         - Contact form message
//! POST /join-us         - Newsletter signup
//! POST /submit          - Music submission
//!
//! # Orders
//! GET  /orders?userId=  - Order history for a user, newest first
//! POST /orders          - Create an order from a checkout payload
//! ```
//!
//! All responses are JSON. Successful reads wrap the payload as
//! `{"success": true, "<entity>": ...}`; successful creates return 201
//! with a `message` and the generated id. Failures use the shared
//! `{"error": "..."}` shape from [`crate::error::AppError`].

pub mod artists;
pub mod contact;
pub mod newsletter;
pub mod orders;
pub mod products;
pub mod submit;
pub mod tours;
pub mod updates;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/artists", get(artists::list))
        .route("/artists/{slug}", get(artists::get_by_slug))
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::get))
        .route("/tours", get(tours::list))
        .route("/updates", get(updates::list))
        .route("/contact", post(contact::submit))
        .route("/join-us", post(newsletter::subscribe))
        .route("/submit", post(submit::submit))
        .route("/orders", get(orders::list).post(orders::create))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
