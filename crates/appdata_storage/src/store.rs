//! Generic store orchestration over a backend.

use crate::backend::{FetchBackend, PersistBackend, RawContent};
use crate::error::StorageResult;
use appdata_codec::{decode, encode, AppData};
use tracing::debug;

/// A typed store over one backend.
///
/// `Store` owns the key-composition and codec logic shared by every
/// backend; the backend contributes only the raw fetch/persist/remove
/// primitives. Writable operations exist only when the backend
/// implements [`PersistBackend`], so a store over a read-only backend
/// has no write surface at all.
///
/// Every operation is a fresh round-trip: nothing is cached between
/// calls, and concurrent calls against the same key race at whatever
/// granularity the backend natively provides.
///
/// # Example
///
/// ```no_run
/// use appdata_storage::{FileBackend, Store};
/// use appdata_codec::AppData;
///
/// # async fn demo() -> appdata_storage::StorageResult<()> {
/// let store = Store::new(FileBackend::new("/var/lib/myapp"));
/// store.write("settings", &AppData::from(true)).await?;
/// let value = store.read("settings").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Store<B> {
    backend: B,
}

impl<B> Store<B> {
    /// Creates a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: FetchBackend> Store<B> {
    /// Composes the backend-resolved key for a relative key.
    ///
    /// The result is `{prefix}/{relative_key}`, suffixed with `.bin`
    /// or `.json` on binary-capable backends according to
    /// `binary_hint`. Text-only backends never get an extension.
    pub fn full_key(&self, relative_key: &str, binary_hint: bool) -> String {
        let base = format!("{}/{}", self.backend.prefix(), relative_key);
        if !self.backend.binary_capable() {
            return base;
        }
        if binary_hint {
            format!("{base}.bin")
        } else {
            format!("{base}.json")
        }
    }

    /// Reads the value stored under `relative_key`.
    ///
    /// Returns `Ok(None)` when nothing is stored there, or when the
    /// persisted text is malformed - the two are indistinguishable to
    /// callers.
    ///
    /// # Errors
    ///
    /// Propagates backend I/O and transport failures unmodified.
    pub async fn read(&self, relative_key: &str) -> StorageResult<Option<AppData>> {
        self.read_raw(relative_key, false).await
    }

    /// Reads the value stored under `relative_key` as a binary entry.
    ///
    /// On a binary-capable backend this resolves the `.bin` key and
    /// hands the bytes back untouched as [`AppData::Binary`].
    ///
    /// # Errors
    ///
    /// Propagates backend I/O and transport failures unmodified.
    pub async fn read_binary(&self, relative_key: &str) -> StorageResult<Option<AppData>> {
        self.read_raw(relative_key, true).await
    }

    async fn read_raw(&self, relative_key: &str, as_binary: bool) -> StorageResult<Option<AppData>> {
        let full_key = self.full_key(relative_key, as_binary);
        debug!(key = %full_key, as_binary, "read");

        let raw = self.backend.fetch(&full_key, as_binary).await?;
        Ok(match raw {
            Some(RawContent::Text(text)) => decode(&text),
            Some(RawContent::Bytes(bytes)) => Some(AppData::Binary(bytes)),
            None => None,
        })
    }
}

impl<B: PersistBackend> Store<B> {
    /// Writes `value` under `relative_key`, overwriting any previous
    /// value.
    ///
    /// A binary value on a binary-capable backend is stored as raw
    /// bytes under the `.bin` key; every other combination goes
    /// through the codec and is stored as wire text.
    ///
    /// # Errors
    ///
    /// Propagates backend I/O failures unmodified.
    pub async fn write(&self, relative_key: &str, value: &AppData) -> StorageResult<()> {
        let is_binary = matches!(value, AppData::Binary(_));
        let full_key = self.full_key(relative_key, is_binary);
        debug!(key = %full_key, is_binary, "write");

        let content = match value {
            AppData::Binary(bytes) if self.backend.binary_capable() => {
                RawContent::Bytes(bytes.clone())
            }
            other => RawContent::Text(encode(other)),
        };
        self.backend.persist(&full_key, content).await
    }

    /// Deletes the entry under `relative_key`.
    ///
    /// Deleting a key that was never written succeeds silently.
    ///
    /// # Errors
    ///
    /// Propagates backend I/O failures unmodified.
    pub async fn delete(&self, relative_key: &str) -> StorageResult<()> {
        self.delete_raw(relative_key, false).await
    }

    /// Deletes the binary entry under `relative_key`.
    ///
    /// # Errors
    ///
    /// Propagates backend I/O failures unmodified.
    pub async fn delete_binary(&self, relative_key: &str) -> StorageResult<()> {
        self.delete_raw(relative_key, true).await
    }

    async fn delete_raw(&self, relative_key: &str, as_binary: bool) -> StorageResult<()> {
        let full_key = self.full_key(relative_key, as_binary);
        debug!(key = %full_key, as_binary, "delete");
        self.backend.remove(&full_key).await
    }
}
