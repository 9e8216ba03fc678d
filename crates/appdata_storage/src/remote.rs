//! Read-only remote HTTP backend.

use crate::backend::{FetchBackend, RawContent};
use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;

/// A plain HTTP response: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

/// HTTP transport abstraction.
///
/// Implement this to swap the transport (reqwest, hyper, a test
/// fake). The remote backend only ever issues GET requests, so one
/// method is the whole surface.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Issues a GET request and returns status plus body.
    ///
    /// # Errors
    ///
    /// Returns an error only when the transport itself fails; a
    /// response with any status code is a successful fetch.
    async fn get(&self, url: &str) -> StorageResult<HttpResponse>;
}

/// A storage backend over a read-only HTTP origin.
///
/// Binary-capable: the origin serves `.bin` and `.json` resources
/// under its base URL. Read-only is enforced structurally - this type
/// implements [`FetchBackend`] only, so a store over it has no write
/// or delete methods to call.
#[derive(Debug)]
pub struct RemoteBackend<F> {
    fetcher: F,
    base_url: String,
}

impl<F: HttpFetcher> RemoteBackend<F> {
    /// Creates a backend fetching from the given base URL.
    pub fn new(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl<F: HttpFetcher> FetchBackend for RemoteBackend<F> {
    fn binary_capable(&self) -> bool {
        true
    }

    fn prefix(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, full_key: &str, as_binary: bool) -> StorageResult<Option<RawContent>> {
        let response = self.fetcher.get(full_key).await?;
        match response.status {
            200 => {
                if as_binary {
                    Ok(Some(RawContent::Bytes(response.body)))
                } else {
                    let text =
                        String::from_utf8(response.body).map_err(|_| StorageError::Utf8 {
                            key: full_key.to_string(),
                        })?;
                    Ok(Some(RawContent::Text(text)))
                }
            }
            404 => Ok(None),
            status => Err(StorageError::Http {
                status,
                url: full_key.to_string(),
            }),
        }
    }
}

/// The default [`HttpFetcher`] over a [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Creates a fetcher with a fresh client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fetcher over an existing client, sharing its
    /// connection pool.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> StorageResult<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?
            .to_vec();
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use appdata_codec::AppData;
    use std::collections::HashMap;

    /// Table-driven fake: unknown URLs answer 404.
    struct FakeFetcher {
        responses: HashMap<String, HttpResponse>,
    }

    impl FakeFetcher {
        fn new(entries: Vec<(&str, u16, &[u8])>) -> Self {
            let responses = entries
                .into_iter()
                .map(|(url, status, body)| {
                    (
                        url.to_string(),
                        HttpResponse {
                            status,
                            body: body.to_vec(),
                        },
                    )
                })
                .collect();
            Self { responses }
        }
    }

    #[async_trait]
    impl HttpFetcher for FakeFetcher {
        async fn get(&self, url: &str) -> StorageResult<HttpResponse> {
            Ok(self.responses.get(url).cloned().unwrap_or(HttpResponse {
                status: 404,
                body: Vec::new(),
            }))
        }
    }

    fn remote(entries: Vec<(&str, u16, &[u8])>) -> Store<RemoteBackend<FakeFetcher>> {
        Store::new(RemoteBackend::new(
            FakeFetcher::new(entries),
            "https://cdn.example.com/app",
        ))
    }

    #[tokio::test]
    async fn status_200_text_decodes() {
        let store = remote(vec![(
            "https://cdn.example.com/app/settings.json",
            200,
            br#"{"theme":"dark"}"#,
        )]);

        let value = store.read("settings").await.unwrap().unwrap();
        assert_eq!(value.get("theme").and_then(AppData::as_text), Some("dark"));
    }

    #[tokio::test]
    async fn status_200_binary_passes_bytes_through() {
        let store = remote(vec![(
            "https://cdn.example.com/app/logo.bin",
            200,
            &[0xde, 0xad, 0xbe, 0xef],
        )]);

        assert_eq!(
            store.read_binary("logo").await.unwrap(),
            Some(AppData::Binary(vec![0xde, 0xad, 0xbe, 0xef]))
        );
    }

    #[tokio::test]
    async fn status_404_is_none() {
        let store = remote(vec![]);
        assert_eq!(store.read("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn other_status_is_an_error_carrying_the_code() {
        let store = remote(vec![(
            "https://cdn.example.com/app/broken.json",
            500,
            b"internal error",
        )]);

        let err = store.read("broken").await.unwrap_err();
        match err {
            StorageError::Http { status, url } => {
                assert_eq!(status, 500);
                assert_eq!(url, "https://cdn.example.com/app/broken.json");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn full_keys_are_urls_with_extensions() {
        let store = remote(vec![]);
        assert_eq!(
            store.full_key("settings", false),
            "https://cdn.example.com/app/settings.json"
        );
        assert_eq!(
            store.full_key("logo", true),
            "https://cdn.example.com/app/logo.bin"
        );
    }
}
