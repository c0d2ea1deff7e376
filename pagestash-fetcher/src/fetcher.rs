use crate::error::Result;
use crate::resolve;
use bytes::Bytes;
use reqwest::Client;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use url::Url;

/// Retrieves resources over plain HTTP and persists them under a target
/// directory.
///
/// The client is deliberately left at its defaults: no extra headers, no
/// timeout, and whatever redirect handling reqwest ships with. A stalled
/// stream therefore blocks until the peer gives up.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the root resource for one command-line address.
    ///
    /// The body is streamed into `dir`, then requested again and buffered
    /// whole; the returned bytes are what the reference scan consumes.
    pub async fn fetch_root(&self, dir: &Path, address: &str) -> Result<Bytes> {
        let url = resolve::resolve(address, None)?;
        let name = resolve::local_filename(address)?;
        info!("Fetching {} into {}", address, dir.display());

        self.download_to(url.clone(), &dir.join(name)).await?;

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(body)
    }

    /// Fetch one referenced asset into `dir`, resolving the reference
    /// against the page it was found on. The body is not kept.
    pub async fn fetch_asset(&self, dir: &Path, reference: &str, origin: &str) -> Result<()> {
        let url = resolve::resolve(reference, Some(origin))?;
        let name = resolve::local_filename(reference)?;
        self.download_to(url, &dir.join(name)).await?;
        Ok(())
    }

    /// Stream a response body chunk-by-chunk into `dest`. Non-success
    /// statuses count as fetch failures.
    async fn download_to(&self, url: Url, dest: &Path) -> Result<u64> {
        debug!("Fetching {} -> {}", url, dest.display());

        let mut response = self.client.get(url).send().await?.error_for_status()?;
        let mut file = File::create(dest).await?;
        let mut written: u64 = 0;

        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn root_fetch_saves_file_and_returns_body() {
        let mock_server = MockServer::start().await;
        let body = "<html><img src=\"logo.png\"></html>";

        // The root resource is requested twice: once streamed to disk,
        // once buffered for the reference scan.
        Mock::given(method("GET"))
            .and(path("/page.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(2)
            .mount(&mock_server)
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let address = format!("{}/page.html", mock_server.uri());

        let fetcher = Fetcher::new();
        let bytes = fetcher.fetch_root(tmp.path(), &address).await.unwrap();

        assert_eq!(bytes.as_ref(), body.as_bytes());
        let saved = std::fs::read(tmp.path().join("page.html")).unwrap();
        assert_eq!(saved, body.as_bytes());
    }

    #[tokio::test]
    async fn relative_asset_resolves_against_origin() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dir/logo.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png-bytes".to_vec()))
            .mount(&mock_server)
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let origin = format!("{}/dir/page.html", mock_server.uri());

        let fetcher = Fetcher::new();
        fetcher
            .fetch_asset(tmp.path(), "logo.png", &origin)
            .await
            .unwrap();

        let saved = std::fs::read(tmp.path().join("logo.png")).unwrap();
        assert_eq!(saved, b"png-bytes");
    }

    #[tokio::test]
    async fn absolute_asset_saved_under_its_basename() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media/clip.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp4".to_vec()))
            .mount(&mock_server)
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let reference = format!("{}/media/clip.mp4", mock_server.uri());
        let origin = format!("{}/page.html", mock_server.uri());

        let fetcher = Fetcher::new();
        fetcher
            .fetch_asset(tmp.path(), &reference, &origin)
            .await
            .unwrap();

        assert!(tmp.path().join("clip.mp4").is_file());
    }

    #[tokio::test]
    async fn http_error_status_is_a_fetch_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let address = format!("{}/missing.png", mock_server.uri());

        let fetcher = Fetcher::new();
        let err = fetcher.fetch_root(tmp.path(), &address).await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }

    #[tokio::test]
    async fn unresolvable_reference_is_an_invalid_address() {
        let tmp = tempfile::tempdir().unwrap();

        let fetcher = Fetcher::new();
        let err = fetcher
            .fetch_asset(tmp.path(), "logo.png", "origin-without-separators")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidAddress(_)));
    }
}
