//! # AppData Codec
//!
//! Value model and tagged-JSON wire codec for the appdata persistence
//! layer.
//!
//! Rich values (date-time instants, raw bytes) must survive a trip
//! through backends whose native storage is plain text. The wire
//! format is ordinary JSON with two tagged-string extensions:
//!
//! - `"dateTime:" + RFC 3339` for instants
//! - `"binary:" + base64` for byte sequences
//!
//! Encoding is deterministic (map entries keep insertion order) and
//! decoding is lenient: text that fails to parse as JSON decodes to
//! `None`, matching the storage layer's "malformed data reads as
//! absent" contract.
//!
//! ## Usage
//!
//! ```
//! use appdata_codec::{decode, encode, AppData};
//!
//! let value = AppData::Map(vec![("answer".to_string(), AppData::from(42i64))]);
//! let text = encode(&value);
//! assert_eq!(text, r#"{"answer":42}"#);
//! assert_eq!(decode(&text), Some(value));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decode;
mod encode;
mod value;

pub use decode::decode;
pub use encode::encode;
pub use value::AppData;
