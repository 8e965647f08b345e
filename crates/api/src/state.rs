//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::firestore::FirestoreClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the configuration and
/// the document store client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    firestore: FirestoreClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let firestore = FirestoreClient::new(&config.firebase);

        Self {
            inner: Arc::new(AppStateInner { config, firestore }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the document store client.
    #[must_use]
    pub fn firestore(&self) -> &FirestoreClient {
        &self.inner.firestore
    }
}
