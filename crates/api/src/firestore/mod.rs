//! Firestore REST API client.
//!
//! # Architecture
//!
//! All persistence is delegated to a hosted Firestore database reached over
//! its REST v1 endpoint with `reqwest`. There is no local database, no sync,
//! and no caching: every gateway call is one HTTP round trip.
//!
//! - Reads use `GET .../documents/{collection}/{id}` or `POST :runQuery`
//!   with a structured query ([`query::Query`]).
//! - Creates use `POST :commit` with a single write that carries the
//!   document fields plus a server-side `createdAt` timestamp transform.
//!   Document ids are generated client-side with the standard 20-character
//!   auto-id alphabet, the same scheme the Firebase SDKs use.
//! - Field values are translated between plain JSON and Firestore's typed
//!   encoding by [`value`].

pub mod query;
pub mod value;

pub use query::{Direction, Query};

use std::sync::Arc;

use rand::Rng;
use secrecy::ExposeSecret;
use serde_json::{Map, Value, json};
use thiserror::Error;
use tracing::instrument;

use crate::config::FirebaseConfig;

const FIRESTORE_HOST: &str = "https://firestore.googleapis.com/v1";

/// Alphabet used by Firestore auto-generated document ids.
const AUTO_ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const AUTO_ID_LENGTH: usize = 20;

/// Errors that can occur when talking to Firestore.
#[derive(Debug, Error)]
pub enum FirestoreError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Firestore returned a non-success status.
    #[error("Firestore error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Document does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A document read from the store, with fields decoded to plain JSON.
#[derive(Debug, Clone)]
pub struct Document {
    /// Full resource name (`projects/.../documents/{collection}/{id}`).
    pub name: String,
    /// Decoded field map.
    pub data: Map<String, Value>,
}

impl Document {
    /// The document id (last segment of the resource name).
    #[must_use]
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Flatten into a JSON object with the id attached, the shape handlers
    /// return to clients.
    #[must_use]
    pub fn into_json(self) -> Value {
        let mut obj = Map::new();
        obj.insert("id".to_string(), Value::String(self.id().to_string()));
        obj.extend(self.data);
        Value::Object(obj)
    }
}

/// Client for the Firestore REST API.
///
/// Cheaply cloneable; holds a shared `reqwest::Client`.
#[derive(Clone)]
pub struct FirestoreClient {
    inner: Arc<FirestoreClientInner>,
}

struct FirestoreClientInner {
    client: reqwest::Client,
    /// `projects/{project}/databases/(default)/documents`
    parent: String,
    api_key: String,
}

impl FirestoreClient {
    /// Create a new client for the configured project.
    #[must_use]
    pub fn new(config: &FirebaseConfig) -> Self {
        let parent = format!(
            "projects/{}/databases/(default)/documents",
            config.project_id
        );

        Self {
            inner: Arc::new(FirestoreClientInner {
                client: reqwest::Client::new(),
                parent,
                api_key: config.api_key.expose_secret().to_string(),
            }),
        }
    }

    /// Run a structured query and return the matching documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store rejects the query.
    #[instrument(skip(self, query))]
    pub async fn run_query(&self, query: Query) -> Result<Vec<Document>, FirestoreError> {
        let url = format!(
            "{FIRESTORE_HOST}/{}:runQuery?key={}",
            self.inner.parent, self.inner.api_key
        );

        let response = self
            .inner
            .client
            .post(&url)
            .json(&query.build())
            .send()
            .await?;

        let body = check_status(response).await?;
        Ok(parse_query_results(&body))
    }

    /// Fetch one document by id.
    ///
    /// # Errors
    ///
    /// Returns `FirestoreError::NotFound` if the document does not exist,
    /// or another variant if the request fails.
    #[instrument(skip(self), fields(collection = %collection, id = %id))]
    pub async fn get(&self, collection: &str, id: &str) -> Result<Document, FirestoreError> {
        let url = format!(
            "{FIRESTORE_HOST}/{}/{collection}/{id}?key={}",
            self.inner.parent, self.inner.api_key
        );

        let response = self.inner.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FirestoreError::NotFound(format!("{collection}/{id}")));
        }

        let body = check_status(response).await?;
        parse_document(&body)
            .ok_or_else(|| FirestoreError::NotFound(format!("{collection}/{id}")))
    }

    /// Create a document with a generated id and a server-assigned
    /// `createdAt` timestamp. Returns the new document id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store rejects the write.
    #[instrument(skip(self, fields), fields(collection = %collection))]
    pub async fn create(
        &self,
        collection: &str,
        fields: &Map<String, Value>,
    ) -> Result<String, FirestoreError> {
        let id = generate_auto_id();
        let doc_name = format!("{}/{collection}/{id}", self.inner.parent);

        let body = json!({
            "writes": [{
                "update": {
                    "name": doc_name,
                    "fields": value::encode_fields(fields),
                },
                "currentDocument": { "exists": false },
                "updateTransforms": [{
                    "fieldPath": "createdAt",
                    "setToServerValue": "REQUEST_TIME",
                }],
            }],
        });

        let url = format!(
            "{FIRESTORE_HOST}/{}:commit?key={}",
            self.inner.parent, self.inner.api_key
        );

        let response = self.inner.client.post(&url).json(&body).send().await?;
        check_status(response).await?;

        Ok(id)
    }
}

/// Turn a non-success response into `FirestoreError::Status`, otherwise
/// parse the body as JSON.
async fn check_status(response: reqwest::Response) -> Result<Value, FirestoreError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        // Error bodies look like {"error": {"message": "...", ...}}
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| text.chars().take(200).collect());

        tracing::error!(status = %status, message = %message, "Firestore request failed");
        return Err(FirestoreError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&text)?)
}

/// Parse a `:runQuery` response body (an array of result entries, some of
/// which carry no document) into documents.
fn parse_query_results(body: &Value) -> Vec<Document> {
    body.as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("document").and_then(parse_document))
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a single document resource, decoding its field values.
fn parse_document(value: &Value) -> Option<Document> {
    let name = value.get("name")?.as_str()?.to_string();
    let data = value
        .get("fields")
        .and_then(Value::as_object)
        .map(value::decode_fields)
        .unwrap_or_default();

    Some(Document { name, data })
}

/// Generate a 20-character document id from the Firestore auto-id alphabet.
fn generate_auto_id() -> String {
    let mut rng = rand::rng();
    (0..AUTO_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..AUTO_ID_ALPHABET.len());
            char::from(AUTO_ID_ALPHABET[idx])
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_auto_id_shape() {
        let id = generate_auto_id();
        assert_eq!(id.len(), AUTO_ID_LENGTH);
        assert!(id.bytes().all(|b| AUTO_ID_ALPHABET.contains(&b)));

        // Two ids should essentially never collide.
        assert_ne!(generate_auto_id(), generate_auto_id());
    }

    #[test]
    fn test_document_id_and_flatten() {
        let doc = Document {
            name: "projects/p/databases/(default)/documents/products/abc123".to_string(),
            data: serde_json::from_value(json!({ "name": "Tour Tee", "price": 25.0 })).unwrap(),
        };

        assert_eq!(doc.id(), "abc123");

        let flat = doc.into_json();
        assert_eq!(flat["id"], json!("abc123"));
        assert_eq!(flat["name"], json!("Tour Tee"));
    }

    #[test]
    fn test_parse_query_results() {
        let body = json!([
            { "readTime": "2025-06-01T12:00:00Z" },
            {
                "document": {
                    "name": "projects/p/databases/(default)/documents/tours/t1",
                    "fields": { "city": { "stringValue": "Cairo" } },
                },
                "readTime": "2025-06-01T12:00:00Z",
            },
        ]);

        let docs = parse_query_results(&body);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id(), "t1");
        assert_eq!(docs[0].data["city"], json!("Cairo"));
    }

    #[test]
    fn test_parse_document_without_fields() {
        let doc = parse_document(&json!({
            "name": "projects/p/databases/(default)/documents/updates/u1",
        }))
        .unwrap();
        assert!(doc.data.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = FirestoreError::NotFound("products/missing".to_string());
        assert_eq!(err.to_string(), "Not found: products/missing");

        let err = FirestoreError::Status {
            status: 403,
            message: "Missing or insufficient permissions.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Firestore error (403): Missing or insufficient permissions."
        );
    }
}
