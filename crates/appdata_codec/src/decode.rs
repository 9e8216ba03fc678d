//! Tagged-JSON to AppData decoding.

use crate::encode::{BINARY_TAG, DATETIME_TAG};
use crate::value::AppData;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Decode wire text back into a value.
///
/// Returns `None` if the text is not valid JSON — callers treat
/// malformed persisted data the same as nothing stored, so a parse
/// failure is not an error.
///
/// Every string leaf is tested against the `tag:payload` convention.
/// A `dateTime:` tag with an RFC 3339 payload becomes a date-time
/// instant; a `binary:` tag with a base64 payload becomes a byte
/// sequence. Any other tag, an unparseable payload, or a plain string
/// is left as text.
///
/// Known limitation, preserved deliberately: a legitimate string value
/// that happens to start with `dateTime:` or `binary:` is
/// reinterpreted as the tagged kind. The wire format has no escape for
/// untagged strings.
pub fn decode(text: &str) -> Option<AppData> {
    let parsed: Value = serde_json::from_str(text).ok()?;
    Some(from_wire(parsed))
}

fn from_wire(value: Value) -> AppData {
    match value {
        Value::Null => AppData::Null,
        Value::Bool(b) => AppData::Bool(b),
        Value::Number(n) => AppData::Number(n),
        Value::String(s) => revive_string(s),
        Value::Array(items) => AppData::List(items.into_iter().map(from_wire).collect()),
        Value::Object(entries) => AppData::Map(
            entries
                .into_iter()
                .map(|(key, item)| (key, from_wire(item)))
                .collect(),
        ),
    }
}

fn revive_string(s: String) -> AppData {
    match split_tagged(&s) {
        Some((DATETIME_TAG, payload)) => match DateTime::parse_from_rfc3339(payload) {
            Ok(dt) => AppData::DateTime(dt.with_timezone(&Utc)),
            Err(_) => AppData::Text(s),
        },
        Some((BINARY_TAG, payload)) => match BASE64.decode(payload) {
            Ok(bytes) => AppData::Binary(bytes),
            Err(_) => AppData::Text(s),
        },
        _ => AppData::Text(s),
    }
}

/// Split `tag:payload` where the tag is a non-empty bare word.
fn split_tagged(s: &str) -> Option<(&str, &str)> {
    let (tag, payload) = s.split_once(':')?;
    if !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some((tag, payload))
    } else {
        None
    }
}
