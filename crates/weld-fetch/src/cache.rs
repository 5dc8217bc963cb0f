//! Page cache backed by a directory of HTML files
//!
//! Every page is stored as `<dir>/<name>.html`. A batch download fires all
//! requests at once and fails with the first error; there is no retry, no
//! deduplication and no cancellation of the downloads still in flight.

use crate::error::FetchError;
use futures_util::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A page to download and the cache key to store it under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// Cache key, used as the file stem
    pub name: String,
    /// Absolute URL of the page
    pub url: String,
}

impl PageRequest {
    /// Create a new request, rejecting names that would escape the cache
    /// directory
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self, FetchError> {
        let name = name.into();
        check_name(&name)?;
        Ok(Self {
            name,
            url: url.into(),
        })
    }
}

/// A page name must be a single non-empty path component
fn check_name(name: &str) -> Result<(), FetchError> {
    let plain = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0']);
    if plain {
        Ok(())
    } else {
        Err(FetchError::InvalidName {
            name: name.to_owned(),
        })
    }
}

/// Directory of downloaded pages
#[derive(Debug, Clone)]
pub struct PageCache {
    dir: PathBuf,
    client: reqwest::Client,
}

impl PageCache {
    /// Create a cache rooted at `dir` with a default HTTP client
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("weld/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::with_client(dir, client))
    }

    /// Create a cache using an existing HTTP client
    pub fn with_client(dir: impl Into<PathBuf>, client: reqwest::Client) -> Self {
        Self {
            dir: dir.into(),
            client,
        }
    }

    /// Cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a page is stored in
    pub fn path_for(&self, name: &str) -> Result<PathBuf, FetchError> {
        check_name(name)?;
        Ok(self.dir.join(format!("{}.html", name)))
    }

    /// Check whether a page is already on disk.
    ///
    /// Only a missing file counts as absent; any other IO failure is an error.
    pub async fn contains(&self, name: &str) -> Result<bool, FetchError> {
        let path = self.path_for(name)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| FetchError::io(path, e))
    }

    /// Read a cached page
    pub async fn read(&self, name: &str) -> Result<String, FetchError> {
        let path = self.path_for(name)?;
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::io(path, e))
    }

    /// Download one page and write it to its cache file
    pub async fn download(&self, request: &PageRequest) -> Result<PathBuf, FetchError> {
        debug!(name = %request.name, url = %request.url, "fetch.download");
        let path = self.path_for(&request.name)?;

        let response = self
            .client
            .get(&request.url)
            .send()
            .await
            .map_err(|e| FetchError::http(&request.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::http(&request.url, e))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FetchError::io(parent, e))?;
        }
        tokio::fs::write(&path, &body)
            .await
            .map_err(|e| FetchError::io(&path, e))?;

        debug!(path = %path.display(), bytes = body.len(), "fetch.download complete");
        Ok(path)
    }

    /// Download every page concurrently.
    ///
    /// Returns the written paths in request order, or the first error.
    pub async fn download_all(&self, requests: &[PageRequest]) -> Result<Vec<PathBuf>, FetchError> {
        info!(count = requests.len(), dir = %self.dir.display(), "downloading pages");
        try_join_all(requests.iter().map(|request| self.download(request))).await
    }

    /// Download only the pages not yet on disk, with the same contract as
    /// [`download_all`](Self::download_all)
    pub async fn download_missing(
        &self,
        requests: &[PageRequest],
    ) -> Result<Vec<PathBuf>, FetchError> {
        let mut missing = Vec::new();
        for request in requests {
            if self.contains(&request.name).await? {
                debug!(name = %request.name, "fetch.cached");
            } else {
                missing.push(request.clone());
            }
        }
        self.download_all(&missing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `status` with `body` to every connection, returning the base URL
    async fn serve(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_path_for() {
        let cache = PageCache::with_client("/tmp/pages", reqwest::Client::new());
        assert_eq!(
            cache.path_for("button").unwrap(),
            PathBuf::from("/tmp/pages/button.html")
        );
        assert_eq!(cache.dir(), Path::new("/tmp/pages"));
    }

    #[test]
    fn test_names_must_stay_inside_cache() {
        for name in ["", ".", "..", "../x", "a/b", "a\\b", "/etc/passwd"] {
            let err = PageRequest::new(name, "http://127.0.0.1:9/").unwrap_err();
            assert!(matches!(err, FetchError::InvalidName { .. }), "{name:?}");
        }
        assert!(PageRequest::new("button.v2", "http://127.0.0.1:9/").is_ok());

        let cache = PageCache::with_client("/tmp/pages", reqwest::Client::new());
        assert!(matches!(
            cache.path_for("../x"),
            Err(FetchError::InvalidName { .. })
        ));
    }

    #[tokio::test]
    async fn test_download_rejects_unchecked_name() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PageCache::new(dir.path().join("html")).unwrap();

        // Deserialized requests bypass `PageRequest::new`
        let request: PageRequest =
            serde_json::from_str(r#"{"name": "../escape", "url": "http://127.0.0.1:9/"}"#)
                .unwrap();
        let err = cache.download(&request).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidName { .. }), "{err}");
        assert!(!dir.path().join("escape.html").exists());
    }

    #[tokio::test]
    async fn test_contains_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();
        let cache = PageCache::new(&file).unwrap();

        let err = cache.contains("button").await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }), "{err}");

        // Unreachable URL: the failed probe must stop the batch before any download
        let requests = vec![PageRequest::new("button", "http://127.0.0.1:9/button").unwrap()];
        let err = cache.download_missing(&requests).await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }), "{err}");
    }

    #[tokio::test]
    async fn test_download_all_writes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let base = serve("200 OK", "<html>button</html>").await;
        let cache = PageCache::new(dir.path().join("html")).unwrap();

        let requests = vec![
            PageRequest::new("button", format!("{}/button", base)).unwrap(),
            PageRequest::new("chip", format!("{}/chip", base)).unwrap(),
        ];
        let paths = cache.download_all(&requests).await.unwrap();

        assert_eq!(
            paths,
            vec![
                cache.path_for("button").unwrap(),
                cache.path_for("chip").unwrap()
            ]
        );
        assert_eq!(cache.read("chip").await.unwrap(), "<html>button</html>");
        assert!(cache.contains("button").await.unwrap());
        assert!(!cache.contains("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PageCache::new(dir.path()).unwrap();
        assert!(cache.download_all(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_error_fails_batch() {
        let dir = tempfile::tempdir().unwrap();
        let ok = serve("200 OK", "fine").await;
        let missing = serve("404 Not Found", "nope").await;
        let cache = PageCache::new(dir.path()).unwrap();

        let requests = vec![
            PageRequest::new("good", ok).unwrap(),
            PageRequest::new("bad", missing).unwrap(),
        ];
        let err = cache.download_all(&requests).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }), "{err}");
    }

    #[tokio::test]
    async fn test_download_missing_skips_cached_pages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("button.html"), "cached").unwrap();
        let cache = PageCache::new(dir.path()).unwrap();

        // Port 9 would fail if the cached page were downloaded again
        let requests = vec![PageRequest::new("button", "http://127.0.0.1:9/button").unwrap()];
        let paths = cache.download_missing(&requests).await.unwrap();

        assert!(paths.is_empty());
        assert_eq!(cache.read("button").await.unwrap(), "cached");
    }

    #[tokio::test]
    async fn test_read_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PageCache::new(dir.path()).unwrap();
        let err = cache.read("absent").await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
