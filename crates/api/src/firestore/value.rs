//! Conversion between plain JSON and Firestore's typed value encoding.
//!
//! The Firestore REST API wraps every field in a type tag, e.g.
//! `{"stringValue": "hi"}` or `{"mapValue": {"fields": {...}}}`. Handlers and
//! gateways work in plain `serde_json::Value`; this module translates at the
//! wire boundary in both directions.

use serde_json::{Map, Value, json};

/// Encode a plain JSON value as a Firestore typed value.
///
/// Integers become `integerValue` (string-encoded, per the API), other
/// numbers `doubleValue`. Objects and arrays recurse.
#[must_use]
pub fn encode(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => n.as_i64().map_or_else(
            || json!({ "doubleValue": n.as_f64() }),
            |i| json!({ "integerValue": i.to_string() }),
        ),
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Encode a JSON object as a Firestore `fields` map.
#[must_use]
pub fn encode_fields(map: &Map<String, Value>) -> Value {
    let fields: Map<String, Value> = map.iter().map(|(k, v)| (k.clone(), encode(v))).collect();
    Value::Object(fields)
}

/// Decode a Firestore typed value back to plain JSON.
///
/// `integerValue` strings parse back to numbers; `timestampValue` stays an
/// RFC 3339 string (that is the REST representation of server timestamps
/// such as `createdAt`). Unknown tags decode to null.
#[must_use]
pub fn decode(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return Value::Null;
    };
    let Some((tag, inner)) = obj.iter().next() else {
        return Value::Null;
    };

    match (tag.as_str(), inner) {
        ("nullValue", _) => Value::Null,
        ("booleanValue", Value::Bool(b)) => Value::Bool(*b),
        ("integerValue", Value::String(s)) => {
            s.parse::<i64>().map_or(Value::Null, |i| json!(i))
        }
        ("doubleValue", Value::Number(n)) => Value::Number(n.clone()),
        ("stringValue" | "timestampValue" | "referenceValue", Value::String(s)) => {
            Value::String(s.clone())
        }
        ("arrayValue", Value::Object(arr)) => {
            let items = arr
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode).collect())
                .unwrap_or_default();
            Value::Array(items)
        }
        ("mapValue", Value::Object(map)) => {
            let fields = map
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .unwrap_or_default();
            Value::Object(fields)
        }
        _ => Value::Null,
    }
}

/// Decode a Firestore `fields` map to a JSON object.
#[must_use]
pub fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields.iter().map(|(k, v)| (k.clone(), decode(v))).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encode(&json!("hi")), json!({ "stringValue": "hi" }));
        assert_eq!(encode(&json!(true)), json!({ "booleanValue": true }));
        assert_eq!(encode(&json!(42)), json!({ "integerValue": "42" }));
        assert_eq!(encode(&json!(19.99)), json!({ "doubleValue": 19.99 }));
        assert_eq!(encode(&Value::Null), json!({ "nullValue": null }));
    }

    #[test]
    fn test_encode_nested() {
        let order = json!({
            "items": [{ "id": "tee", "quantity": 2 }],
            "total": 50.0,
        });
        let encoded = encode(&order);

        assert_eq!(
            encoded["mapValue"]["fields"]["total"],
            json!({ "doubleValue": 50.0 })
        );
        assert_eq!(
            encoded["mapValue"]["fields"]["items"]["arrayValue"]["values"][0]["mapValue"]
                ["fields"]["id"],
            json!({ "stringValue": "tee" })
        );
    }

    #[test]
    fn test_decode_roundtrip() {
        let original = json!({
            "name": "Tour Tee",
            "price": 25.5,
            "stock": 10,
            "tags": ["merch", "tour"],
            "meta": { "featured": true },
        });
        let decoded = decode(&encode(&original));
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_timestamp_stays_string() {
        let value = json!({ "timestampValue": "2025-06-01T12:00:00Z" });
        assert_eq!(decode(&value), json!("2025-06-01T12:00:00Z"));
    }

    #[test]
    fn test_decode_unknown_tag() {
        assert_eq!(decode(&json!({ "geoPointValue": {} })), Value::Null);
        assert_eq!(decode(&json!("bare")), Value::Null);
    }
}
