//! Tour collection gateway.

use serde_json::Value;

use crate::firestore::{Direction, Document, FirestoreClient, FirestoreError, Query};

const COLLECTION: &str = "tours";

/// Gateway for the read-only `tours` collection.
pub struct TourGateway<'a> {
    client: &'a FirestoreClient,
}

impl<'a> TourGateway<'a> {
    /// Create a new tour gateway.
    #[must_use]
    pub const fn new(client: &'a FirestoreClient) -> Self {
        Self { client }
    }

    /// List all tour dates, soonest first.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if the query fails.
    pub async fn list(&self) -> Result<Vec<Value>, FirestoreError> {
        let docs = self
            .client
            .run_query(Query::collection(COLLECTION).order_by("date", Direction::Ascending))
            .await?;

        Ok(docs.into_iter().map(Document::into_json).collect())
    }
}
