//! Wire format of the summary feed.
//!
//! Records arrive as GeoJSON-style features: a geometry carrying a
//! `[lon, lat, depth]` coordinate triple and a properties bag with magnitude,
//! place, time and url. Partial feeds are expected, so every field is
//! optional and scalars are kept as loose JSON values; a field whose type
//! does not match the expected scalar is treated as absent, never as zero or
//! an empty string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFeed {
    #[serde(default)]
    pub features: Vec<RawRecord>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
    #[serde(default)]
    pub properties: Value,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGeometry {
    #[serde(default)]
    pub coordinates: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedParseError {
    /// The body was not valid JSON at all.
    Malformed(String),
}

impl std::fmt::Display for FeedParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedParseError::Malformed(msg) => write!(f, "malformed feed body: {msg}"),
        }
    }
}

impl std::error::Error for FeedParseError {}

impl RawFeed {
    pub fn from_json(body: &str) -> Result<Self, FeedParseError> {
        serde_json::from_str(body).map_err(|e| FeedParseError::Malformed(e.to_string()))
    }
}

/// Reads a JSON value as a finite float, or absent.
pub fn as_finite_f64(value: &Value) -> Option<f64> {
    let n = value.as_f64()?;
    n.is_finite().then_some(n)
}

/// Reads a JSON value as an integer millisecond timestamp, or absent.
pub fn as_millis(value: &Value) -> Option<i64> {
    value.as_i64()
}

/// Reads a JSON value as a string, or absent.
pub fn as_text(value: &Value) -> Option<&str> {
    value.as_str()
}

#[cfg(test)]
mod tests {
    use super::{RawFeed, as_finite_f64, as_millis, as_text};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_a_summary_feed() {
        let body = r#"{
            "features": [
                {
                    "id": "ak0191",
                    "geometry": { "coordinates": [-150.5, 61.2, 40.0] },
                    "properties": { "mag": 4.2, "place": "Alaska", "time": 1700000000000 }
                }
            ]
        }"#;
        let feed = RawFeed::from_json(body).unwrap();
        assert_eq!(feed.features.len(), 1);
        assert_eq!(feed.features[0].id.as_deref(), Some("ak0191"));
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(RawFeed::from_json("<html>503</html>").is_err());
    }

    #[test]
    fn scalar_readers_coerce_mismatches_to_absent() {
        assert_eq!(as_finite_f64(&json!("4.2")), None);
        assert_eq!(as_finite_f64(&json!(null)), None);
        assert_eq!(as_finite_f64(&json!(4.2)), Some(4.2));
        assert_eq!(as_millis(&json!("yesterday")), None);
        assert_eq!(as_millis(&json!(1700000000000i64)), Some(1700000000000));
        assert_eq!(as_text(&json!(7)), None);
        assert_eq!(as_text(&json!("Alaska")), Some("Alaska"));
    }
}
