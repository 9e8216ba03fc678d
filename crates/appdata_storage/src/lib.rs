//! # AppData Storage
//!
//! Backend traits and implementations for persisting typed
//! application data across media with very different native
//! capabilities.
//!
//! A [`Store`] composes full keys and applies the
//! [`appdata_codec`] wire codec; backends contribute only three raw
//! primitives (fetch, persist, remove). The capability split is
//! structural:
//!
//! - [`FileBackend`] - filesystem, binary-capable, read/write
//! - [`StringStoreBackend`] - flat string store (browser-style),
//!   text-only, read/write
//! - [`RemoteBackend`] - HTTP origin, binary-capable, read-only
//!   (implements only the fetch half, so writes are unrepresentable)
//!
//! ## Example
//!
//! ```no_run
//! use appdata_storage::{default_store, StorageResult};
//! use appdata_codec::AppData;
//!
//! # async fn demo() -> StorageResult<()> {
//! let store = default_store("/var/lib/myapp");
//! store.write("counter", &AppData::from(1i64)).await?;
//! assert_eq!(store.read("counter").await?, Some(AppData::from(1i64)));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod local;
mod remote;
mod store;

pub use backend::{FetchBackend, PersistBackend, RawContent};
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use local::{MemoryStringStore, StringStore, StringStoreBackend};
pub use remote::{HttpFetcher, HttpResponse, RemoteBackend, ReqwestFetcher};
pub use store::Store;

use std::path::PathBuf;

/// The default writable store for the current environment.
///
/// On a native target the filesystem is the environment's persistent
/// store, so this returns a file-backed store rooted at `root`. Hosts
/// embedding a browser-style string store instead construct
/// `Store::new(StringStoreBackend::new(...))` explicitly; the choice
/// is made once, here or there, not deferred per call.
pub fn default_store(root: impl Into<PathBuf>) -> Store<FileBackend> {
    Store::new(FileBackend::new(root))
}
