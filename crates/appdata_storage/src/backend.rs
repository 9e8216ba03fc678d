//! Backend trait definitions.

use crate::error::StorageResult;
use async_trait::async_trait;

/// Raw persisted content, as a backend natively holds it.
///
/// Text-only backends only ever see the `Text` form; binary-capable
/// backends see `Bytes` for binary entries and `Text` for everything
/// that went through the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawContent {
    /// Wire text produced by the codec.
    Text(String),
    /// A raw byte sequence stored without encoding.
    Bytes(Vec<u8>),
}

/// The readable half of a storage backend.
///
/// A backend is stateless beyond its fixed key prefix: it caches
/// nothing between calls and owns no resource other than the prefix
/// chosen at construction.
///
/// # Contract
///
/// - `fetch` returns `Ok(None)` when the key is absent. Absence is
///   never an error; only genuine I/O or transport failures are.
/// - Backends must be `Send + Sync` for use across async tasks.
///
/// # Implementors
///
/// - [`super::FileBackend`] - filesystem, binary-capable, read/write
/// - [`super::StringStoreBackend`] - flat string store, text-only, read/write
/// - [`super::RemoteBackend`] - HTTP origin, binary-capable, read-only
#[async_trait]
pub trait FetchBackend: Send + Sync {
    /// Whether this backend can store raw bytes natively.
    ///
    /// Binary-capable backends distinguish entries with `.bin` /
    /// `.json` extensions on the full key; text-only backends append
    /// no extension and receive every value as codec text.
    fn binary_capable(&self) -> bool;

    /// The fixed key prefix this backend was constructed with.
    fn prefix(&self) -> &str;

    /// Reads the raw content stored at `full_key`.
    ///
    /// `as_binary` tells a binary-capable backend to hand the content
    /// back as bytes rather than text.
    ///
    /// # Errors
    ///
    /// Returns an error for genuine I/O or transport failure, never
    /// for an absent key.
    async fn fetch(&self, full_key: &str, as_binary: bool) -> StorageResult<Option<RawContent>>;
}

/// The writable half of a storage backend.
///
/// Read-only backends simply do not implement this trait, so write
/// and delete are unrepresentable against them rather than failing at
/// call time.
#[async_trait]
pub trait PersistBackend: FetchBackend {
    /// Stores `content` at `full_key`, overwriting existing content.
    ///
    /// Implementations must create any missing intermediate structure
    /// (parent directories and the like) before storing.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be stored.
    async fn persist(&self, full_key: &str, content: RawContent) -> StorageResult<()>;

    /// Removes the entry at `full_key`.
    ///
    /// Removing an absent key succeeds silently. This is a hard
    /// contract for every implementation, not a per-backend choice.
    ///
    /// # Errors
    ///
    /// Returns an error for genuine I/O failure only.
    async fn remove(&self, full_key: &str) -> StorageResult<()>;
}
