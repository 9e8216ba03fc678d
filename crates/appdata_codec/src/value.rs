//! Dynamic application-data value type.

use chrono::{DateTime, Utc};
use serde_json::Number;

/// A dynamic application-data value.
///
/// This type represents the full set of node kinds the persistence
/// layer can round-trip: JSON-native scalars plus date-time instants
/// and raw byte sequences, nested in lists and string-keyed maps.
/// The structure is an owned tree, so it is acyclic by construction.
///
/// Map entries preserve insertion order. Order is not semantically
/// significant for maps, but the wire encoding must be deterministic,
/// so the order a map was built in is the order it encodes in. List
/// order is always significant.
#[derive(Debug, Clone, PartialEq)]
pub enum AppData {
    /// An absent slot inside a list or map (JSON `null`).
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value (JSON number semantics).
    Number(Number),
    /// Text string (UTF-8).
    Text(String),
    /// A date-time instant (UTC).
    DateTime(DateTime<Utc>),
    /// Raw byte sequence.
    Binary(Vec<u8>),
    /// Ordered list of values.
    List(Vec<AppData>),
    /// String-keyed map of values, in insertion order.
    Map(Vec<(String, AppData)>),
}

impl AppData {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, AppData::Null)
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AppData::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as an `i64`, if it is an integral number in range.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AppData::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Get this value as an `f64`, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AppData::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AppData::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a date-time instant, if it is one.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            AppData::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Get this value as bytes, if it is a binary blob.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            AppData::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[AppData]> {
        match self {
            AppData::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get this value as map entries, if it is a map.
    pub fn as_map(&self) -> Option<&[(String, AppData)]> {
        match self {
            AppData::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key in this map value.
    pub fn get(&self, key: &str) -> Option<&AppData> {
        match self {
            AppData::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for AppData {
    fn from(b: bool) -> Self {
        AppData::Bool(b)
    }
}

impl From<i64> for AppData {
    fn from(n: i64) -> Self {
        AppData::Number(Number::from(n))
    }
}

impl From<i32> for AppData {
    fn from(n: i32) -> Self {
        AppData::Number(Number::from(n))
    }
}

impl From<u32> for AppData {
    fn from(n: u32) -> Self {
        AppData::Number(Number::from(n))
    }
}

impl From<String> for AppData {
    fn from(s: String) -> Self {
        AppData::Text(s)
    }
}

impl From<&str> for AppData {
    fn from(s: &str) -> Self {
        AppData::Text(s.to_string())
    }
}

impl From<DateTime<Utc>> for AppData {
    fn from(dt: DateTime<Utc>) -> Self {
        AppData::DateTime(dt)
    }
}

impl From<Vec<u8>> for AppData {
    fn from(b: Vec<u8>) -> Self {
        AppData::Binary(b)
    }
}

impl From<&[u8]> for AppData {
    fn from(b: &[u8]) -> Self {
        AppData::Binary(b.to_vec())
    }
}

impl From<()> for AppData {
    fn from((): ()) -> Self {
        AppData::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn value_accessors() {
        assert!(AppData::Null.is_null());
        assert!(!AppData::Bool(true).is_null());

        assert_eq!(AppData::Bool(true).as_bool(), Some(true));
        assert_eq!(AppData::from(42i64).as_bool(), None);

        assert_eq!(AppData::from(42i64).as_i64(), Some(42));
        assert_eq!(AppData::from("42").as_i64(), None);

        assert_eq!(AppData::from("hello").as_text(), Some("hello"));
        assert_eq!(
            AppData::Binary(vec![1, 2, 3]).as_bytes(),
            Some(&[1, 2, 3][..])
        );
    }

    #[test]
    fn datetime_accessor() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let value = AppData::from(instant);
        assert_eq!(value.as_datetime(), Some(instant));
        assert_eq!(AppData::from("2024").as_datetime(), None);
    }

    #[test]
    fn map_get() {
        let map = AppData::Map(vec![
            ("name".to_string(), AppData::from("Alice")),
            ("age".to_string(), AppData::from(30i64)),
        ]);

        assert_eq!(map.get("name"), Some(&AppData::from("Alice")));
        assert_eq!(map.get("age"), Some(&AppData::from(30i64)));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn map_preserves_insertion_order() {
        let map = AppData::Map(vec![
            ("z".to_string(), AppData::from(1i64)),
            ("a".to_string(), AppData::from(2i64)),
        ]);

        let entries = map.as_map().unwrap();
        assert_eq!(entries[0].0, "z");
        assert_eq!(entries[1].0, "a");
    }

    #[test]
    fn from_impls() {
        assert_eq!(AppData::from(true), AppData::Bool(true));
        assert_eq!(AppData::from(42i64), AppData::Number(Number::from(42)));
        assert_eq!(AppData::from("hello"), AppData::Text("hello".to_string()));
        assert_eq!(
            AppData::from(vec![1u8, 2, 3]),
            AppData::Binary(vec![1, 2, 3])
        );
        assert_eq!(AppData::from(()), AppData::Null);
    }
}
