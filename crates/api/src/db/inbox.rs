//! Gateways for the three write-only intake collections: contact form
//! messages, newsletter subscribers, and music submissions.

use serde::Serialize;
use serde_json::Value;

use crate::firestore::{FirestoreClient, FirestoreError};

/// A validated contact form message bound for the `contacts` collection.
#[derive(Debug, Serialize)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub comment: String,
}

/// A newsletter signup bound for the `subscribers` collection.
#[derive(Debug, Serialize)]
pub struct SubscriberRecord {
    pub email: String,
}

/// A music submission bound for the `submissions` collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub role: String,
    pub submission_type: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub artist: String,
    pub profile: String,
}

/// Gateway over the intake collections.
pub struct InboxGateway<'a> {
    client: &'a FirestoreClient,
}

impl<'a> InboxGateway<'a> {
    /// Create a new inbox gateway.
    #[must_use]
    pub const fn new(client: &'a FirestoreClient) -> Self {
        Self { client }
    }

    /// Store a contact form message and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if the write fails.
    pub async fn create_contact(&self, record: &ContactRecord) -> Result<String, FirestoreError> {
        self.create_in("contacts", record).await
    }

    /// Store a newsletter signup and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if the write fails.
    pub async fn create_subscriber(
        &self,
        record: &SubscriberRecord,
    ) -> Result<String, FirestoreError> {
        self.create_in("subscribers", record).await
    }

    /// Store a music submission and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError` if the write fails.
    pub async fn create_submission(
        &self,
        record: &SubmissionRecord,
    ) -> Result<String, FirestoreError> {
        self.create_in("submissions", record).await
    }

    async fn create_in<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, FirestoreError> {
        let Value::Object(fields) = serde_json::to_value(record)? else {
            unreachable!("intake records always serialize as JSON objects");
        };

        self.client.create(collection, &fields).await
    }
}
