//! Order collection gateway.

use badinvstmnt_core::order::NewOrder;
use serde_json::{Value, json};

use crate::firestore::{Direction, Document, FirestoreClient, FirestoreError, Query};

const COLLECTION: &str = "orders";

/// Gateway for the `orders` collection.
pub struct OrderGateway<'a> {
    client: &'a FirestoreClient,
}

impl<'a> OrderGateway<'a> {
    /// Create a new order gateway.
    #[must_use]
    pub const fn new(client: &'a FirestoreClient) -> Self {
        Self { client }
    }

    /// Persist a validated order and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if serialization or the write fails.
    pub async fn create(&self, order: &NewOrder) -> Result<String, FirestoreError> {
        let Value::Object(fields) = serde_json::to_value(order)? else {
            unreachable!("orders always serialize as JSON objects");
        };

        self.client.create(COLLECTION, &fields).await
    }

    /// List all orders placed by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if the query fails.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Value>, FirestoreError> {
        let docs = self
            .client
            .run_query(
                Query::collection(COLLECTION)
                    .where_eq("userId", json!(user_id))
                    .order_by("createdAt", Direction::Descending),
            )
            .await?;

        Ok(docs.into_iter().map(Document::into_json).collect())
    }
}
