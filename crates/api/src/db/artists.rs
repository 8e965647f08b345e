//! Artist collection gateway.

use serde_json::{Value, json};

use crate::firestore::{Direction, Document, FirestoreClient, FirestoreError, Query};

const COLLECTION: &str = "artists";

/// Gateway for the read-only `artists` collection.
pub struct ArtistGateway<'a> {
    client: &'a FirestoreClient,
}

impl<'a> ArtistGateway<'a> {
    /// Create a new artist gateway.
    #[must_use]
    pub const fn new(client: &'a FirestoreClient) -> Self {
        Self { client }
    }

    /// List all artists, ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if the query fails.
    pub async fn list(&self) -> Result<Vec<Value>, FirestoreError> {
        let docs = self
            .client
            .run_query(Query::collection(COLLECTION).order_by("name", Direction::Ascending))
            .await?;

        Ok(docs.into_iter().map(Document::into_json).collect())
    }

    /// Look up an artist by slug. Returns `None` when no artist matches.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if the query fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Value>, FirestoreError> {
        let docs = self
            .client
            .run_query(Query::collection(COLLECTION).where_eq("slug", json!(slug)))
            .await?;

        Ok(docs.into_iter().next().map(Document::into_json))
    }
}
