//! Product collection gateway.

use serde_json::Value;

use crate::firestore::{Direction, Document, FirestoreClient, FirestoreError, Query};

const COLLECTION: &str = "products";

/// Gateway for the read-only `products` collection.
pub struct ProductGateway<'a> {
    client: &'a FirestoreClient,
}

impl<'a> ProductGateway<'a> {
    /// Create a new product gateway.
    #[must_use]
    pub const fn new(client: &'a FirestoreClient) -> Self {
        Self { client }
    }

    /// List all products, ordered by name ascending.
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

    /// Fetch a single product by document id. Returns `None` when the
    /// document does not exist.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` on transport or store failures other
    /// than a missing document.
    pub async fn get(&self, id: &str) -> Result<Option<Value>, FirestoreError> {
        match self.client.get(COLLECTION, id).await {
            Ok(doc) => Ok(Some(doc.into_json())),
            Err(FirestoreError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
