//! Filesystem backend.

use crate::backend::{FetchBackend, PersistBackend, RawContent};
use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A filesystem-backed storage backend.
///
/// Binary-capable and writable: binary entries land as `.bin` files
/// holding raw bytes, everything else as `.json` files holding wire
/// text. Full keys resolve to paths under the root directory chosen
/// at construction.
///
/// There is no cross-operation locking. Two concurrent writers to the
/// same key interleave at the filesystem level; callers serialize if
/// they need ordering. Parent-directory creation and the file write
/// are two separate steps, not an atomic pair.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
    prefix: String,
}

impl FileBackend {
    /// Creates a backend rooted at the given directory.
    ///
    /// The directory does not have to exist yet; it is created on the
    /// first write that needs it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let prefix = root.to_string_lossy().into_owned();
        Self { root, prefix }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FetchBackend for FileBackend {
    fn binary_capable(&self) -> bool {
        true
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    async fn fetch(&self, full_key: &str, as_binary: bool) -> StorageResult<Option<RawContent>> {
        let bytes = match tokio::fs::read(full_key).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if as_binary {
            return Ok(Some(RawContent::Bytes(bytes)));
        }
        let text = String::from_utf8(bytes).map_err(|_| StorageError::Utf8 {
            key: full_key.to_string(),
        })?;
        Ok(Some(RawContent::Text(text)))
    }
}

#[async_trait]
impl PersistBackend for FileBackend {
    async fn persist(&self, full_key: &str, content: RawContent) -> StorageResult<()> {
        let path = Path::new(full_key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        match content {
            RawContent::Text(text) => tokio::fs::write(path, text).await?,
            RawContent::Bytes(bytes) => tokio::fs::write(path, bytes).await?,
        }
        Ok(())
    }

    async fn remove(&self, full_key: &str) -> StorageResult<()> {
        match tokio::fs::remove_file(full_key).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn key(dir: &tempfile::TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn fetch_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.fetch(&key(&dir, "nope.json"), false).await.unwrap(), None);
    }

    #[tokio::test]
    async fn persist_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        let k = key(&dir, "deeply/nested/entry.json");

        backend
            .persist(&k, RawContent::Text("true".to_string()))
            .await
            .unwrap();
        assert_eq!(
            backend.fetch(&k, false).await.unwrap(),
            Some(RawContent::Text("true".to_string()))
        );
    }

    #[tokio::test]
    async fn persist_overwrites_existing_content() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        let k = key(&dir, "entry.json");

        backend
            .persist(&k, RawContent::Text("1".to_string()))
            .await
            .unwrap();
        backend
            .persist(&k, RawContent::Text("2".to_string()))
            .await
            .unwrap();
        assert_eq!(
            backend.fetch(&k, false).await.unwrap(),
            Some(RawContent::Text("2".to_string()))
        );
    }

    #[tokio::test]
    async fn binary_roundtrip_is_byte_exact() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        let k = key(&dir, "blob.bin");
        let bytes = vec![0u8, 1, 254, 255];

        backend
            .persist(&k, RawContent::Bytes(bytes.clone()))
            .await
            .unwrap();
        assert_eq!(
            backend.fetch(&k, true).await.unwrap(),
            Some(RawContent::Bytes(bytes))
        );
    }

    #[tokio::test]
    async fn text_fetch_of_non_utf8_content_is_an_error() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        let k = key(&dir, "raw.json");

        backend
            .persist(&k, RawContent::Bytes(vec![0xff, 0xfe]))
            .await
            .unwrap();
        let result = backend.fetch(&k, false).await;
        assert!(matches!(result, Err(StorageError::Utf8 { .. })));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        let k = key(&dir, "entry.json");

        backend.remove(&k).await.unwrap();

        backend
            .persist(&k, RawContent::Text("x".to_string()))
            .await
            .unwrap();
        backend.remove(&k).await.unwrap();
        backend.remove(&k).await.unwrap();
        assert_eq!(backend.fetch(&k, false).await.unwrap(), None);
    }

    #[test]
    fn backend_is_binary_capable_with_root_prefix() {
        let backend = FileBackend::new("/tmp/appdata");
        assert!(backend.binary_capable());
        assert_eq!(backend.prefix(), "/tmp/appdata");
        assert_eq!(backend.root(), Path::new("/tmp/appdata"));
    }
}
