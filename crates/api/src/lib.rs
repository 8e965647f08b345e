//! BADINVSTMNT site API.
//!
//! JSON backend for the collective's website: artist and product catalog
//! reads, tour dates and news updates, form intake (contact, newsletter,
//! music submissions), and order creation with per-user history. All
//! persistence is delegated to a hosted document store over its REST API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod firestore;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with tracing and CORS layers applied.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
