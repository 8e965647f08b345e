//! Updates (news post) collection gateway.

use serde_json::Value;

use crate::firestore::{Direction, Document, FirestoreClient, FirestoreError, Query};

const COLLECTION: &str = "updates";

/// Gateway for the read-only `updates` collection.
pub struct UpdateGateway<'a> {
    client: &'a FirestoreClient,
}

impl<'a> UpdateGateway<'a> {
    /// Create a new update gateway.
    #[must_use]
    pub const fn new(client: &'a FirestoreClient) -> Self {
        Self { client }
    }

    /// List all updates, newest first.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if the query fails.
    pub async fn list(&self) -> Result<Vec<Value>, FirestoreError> {
        let docs = self
            .client
            .run_query(Query::collection(COLLECTION).order_by("date", Direction::Descending))
            .await?;

        Ok(docs.into_iter().map(Document::into_json).collect())
    }
}
