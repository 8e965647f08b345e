//! Structured query builder for the Firestore `:runQuery` endpoint.
//!
//! Only what the collection gateways need: a single collection selector, an
//! optional equality filter, and an optional sort. Ordering semantics are
//! delegated entirely to the store.

use serde_json::{Value, json};

use super::value;

/// Sort direction for an `orderBy` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
        }
    }
}

/// Builder for a Firestore structured query over one collection.
#[derive(Debug, Clone)]
pub struct Query {
    collection: String,
    filter: Option<(String, Value)>,
    order_by: Option<(String, Direction)>,
}

impl Query {
    /// Start a query over a collection.
    #[must_use]
    pub fn collection(name: &str) -> Self {
        Self {
            collection: name.to_string(),
            filter: None,
            order_by: None,
        }
    }

    /// Add an equality filter on a field.
    #[must_use]
    pub fn where_eq(mut self, field: &str, value: Value) -> Self {
        self.filter = Some((field.to_string(), value));
        self
    }

    /// Sort by a field.
    #[must_use]
    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by = Some((field.to_string(), direction));
        self
    }

    /// Build the `structuredQuery` request body.
    #[must_use]
    pub fn build(self) -> Value {
        let mut query = json!({
            "from": [{ "collectionId": self.collection }],
        });

        if let (Some(map), Some((field, filter_value))) = (query.as_object_mut(), self.filter) {
            map.insert(
                "where".to_string(),
                json!({
                    "fieldFilter": {
                        "field": { "fieldPath": field },
                        "op": "EQUAL",
                        "value": value::encode(&filter_value),
                    }
                }),
            );
        }

        if let (Some(map), Some((field, direction))) =
            (query.as_object_mut(), self.order_by.as_ref())
        {
            map.insert(
                "orderBy".to_string(),
                json!([{
                    "field": { "fieldPath": field },
                    "direction": direction.as_str(),
                }]),
            );
        }

        json!({ "structuredQuery": query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ordered_query() {
        let body = Query::collection("products")
            .order_by("name", Direction::Ascending)
            .build();

        assert_eq!(
            body["structuredQuery"]["from"],
            json!([{ "collectionId": "products" }])
        );
        assert_eq!(
            body["structuredQuery"]["orderBy"],
            json!([{ "field": { "fieldPath": "name" }, "direction": "ASCENDING" }])
        );
        assert!(body["structuredQuery"].get("where").is_none());
    }

    #[test]
    fn test_equality_filter() {
        let body = Query::collection("artists")
            .where_eq("slug", json!("night-drive"))
            .build();

        let filter = &body["structuredQuery"]["where"]["fieldFilter"];
        assert_eq!(filter["field"]["fieldPath"], json!("slug"));
        assert_eq!(filter["op"], json!("EQUAL"));
        assert_eq!(filter["value"], json!({ "stringValue": "night-drive" }));
    }

    #[test]
    fn test_descending_order() {
        let body = Query::collection("updates")
            .order_by("date", Direction::Descending)
            .build();

        assert_eq!(
            body["structuredQuery"]["orderBy"][0]["direction"],
            json!("DESCENDING")
        );
    }
}
