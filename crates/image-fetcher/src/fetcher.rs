//! Cache lookup, download, validation, and write-through

use crate::error::{FetchError, Result};
use file_image_cache::FileImageCache;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Fetches image bytes by URL, preferring a disk cache over the network.
///
/// A cache hit returns the stored bytes with zero network access. A miss
/// downloads the image, validates that the bytes decode, writes them through
/// to the cache best-effort, and returns them exactly as received (never
/// re-encoded). Concurrent calls proceed independently; the cache tolerates
/// racing writers on the same key.
pub struct ImageFetcher {
    client: reqwest::Client,
    cache: FileImageCache,
}

impl ImageFetcher {
    /// Create a fetcher over `cache` with default settings (30 second timeout)
    pub fn new(cache: FileImageCache) -> Self {
        Self::with_timeout(cache, Duration::from_secs(30))
    }

    /// Create a fetcher over `cache` with a custom request timeout
    pub fn with_timeout(cache: FileImageCache, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, cache }
    }

    /// The underlying cache, for inspection
    pub fn cache(&self) -> &FileImageCache {
        &self.cache
    }

    /// Fetch the image at `url`.
    ///
    /// Returns the cached bytes on a hit. On a miss the image is downloaded
    /// and validated before the cache is populated; a transport failure or
    /// undecodable body leaves no cache entry behind. A failed cache write
    /// is logged and the fetch still succeeds.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        let key = self.cache.key_for(url);
        if let Some(bytes) = self.cache.get(&key).await {
            debug!(url, size = bytes.len(), "serving image from cache");
            return Ok(bytes);
        }

        debug!(url, "downloading image");
        let response = self.client.get(parsed).send().await?;

        if !response.status().is_success() {
            warn!(url, status = %response.status(), "image download failed");
            return Err(FetchError::Status(response.status()));
        }

        let bytes = response.bytes().await?.to_vec();

        // Undecodable bodies must never reach the cache
        image::load_from_memory(&bytes).map_err(FetchError::InvalidImageData)?;

        if let Err(e) = self.cache.put(&key, &bytes).await {
            warn!(url, error = %e, "failed to cache image");
        }

        Ok(bytes)
    }
}
