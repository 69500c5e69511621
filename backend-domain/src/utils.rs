use serde_json::{Map, Value};
use tracing::debug;

/// Decoded form of an optional serialized-mapping column.
pub type NestedFields = Map<String, Value>;

/// Decodes a nested JSON column, yielding an empty mapping when the value is
/// absent, blank, malformed, or not a JSON object.
///
/// Takes raw bytes so that TEXT and BLOB storage decode the same way.
pub fn decode_nested(raw: Option<&[u8]>) -> NestedFields {
    let Some(bytes) = raw.filter(|bytes| !bytes.iter().all(u8::is_ascii_whitespace)) else {
        return NestedFields::new();
    };
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            debug!("nested field is not an object, ignoring: {}", other);
            NestedFields::new()
        }
        Err(err) => {
            debug!("nested field decode failed: {}", err);
            NestedFields::new()
        }
    }
}

/// Rounds to two decimal places from the exact binary value, breaking exact
/// ties to even (82.125 becomes 82.12).
pub fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
