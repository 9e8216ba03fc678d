//! AppData to tagged-JSON encoding.

use crate::value::AppData;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::SecondsFormat;
use serde_json::Value;

/// Tag prefixing date-time instants on the wire.
pub(crate) const DATETIME_TAG: &str = "dateTime";
/// Tag prefixing base64-encoded byte sequences on the wire.
pub(crate) const BINARY_TAG: &str = "binary";

/// Encode a value to its tagged-JSON wire text.
///
/// JSON-native scalars pass through unchanged. A date-time instant
/// becomes the string `"dateTime:" + RFC 3339` (millisecond precision,
/// `Z` suffix); a byte sequence becomes `"binary:" + base64`. Lists
/// and maps are walked recursively, and map entries encode in
/// insertion order, so identical input always produces identical
/// output.
///
/// Encoding is total: every [`AppData`] tree has a wire form.
pub fn encode(value: &AppData) -> String {
    to_wire(value).to_string()
}

fn to_wire(value: &AppData) -> Value {
    match value {
        AppData::Null => Value::Null,
        AppData::Bool(b) => Value::Bool(*b),
        AppData::Number(n) => Value::Number(n.clone()),
        AppData::Text(s) => Value::String(s.clone()),
        AppData::DateTime(dt) => Value::String(format!(
            "{DATETIME_TAG}:{}",
            dt.to_rfc3339_opts(SecondsFormat::Millis, true)
        )),
        AppData::Binary(bytes) => Value::String(format!("{BINARY_TAG}:{}", BASE64.encode(bytes))),
        AppData::List(items) => Value::Array(items.iter().map(to_wire).collect()),
        AppData::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), to_wire(item)))
                .collect(),
        ),
    }
}
