//! Disk-backed storage of image bytes

use crate::types::CacheStats;
use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Disk cache for image bytes, keyed by source URL.
///
/// Each entry is a single file named by the SHA-256 digest of its key, so
/// file naming is stable across process runs. Writes go through a uniquely
/// named temp file and a rename, so a concurrent reader observes either the
/// previous entry or the complete new one, never a partial file. Entries are
/// never expired or evicted.
pub struct FileImageCache {
    cache_dir: PathBuf,
    hits: AtomicU64,
    misses: AtomicU64,
    tmp_counter: AtomicU64,
}

impl FileImageCache {
    /// Create a cache rooted at `cache_dir`.
    ///
    /// The directory is not touched until [`FileImageCache::init`] is
    /// called; reads against a missing directory simply report a miss.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            tmp_counter: AtomicU64::new(0),
        }
    }

    /// Create the cache directory if it does not exist yet.
    ///
    /// Idempotent; safe to call from multiple call sites. If creation fails
    /// the cache still answers reads with a miss, and writes return the
    /// underlying error to their caller.
    pub async fn init(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.cache_dir).await
    }

    /// Cache key for a source URL: the URL string itself, unmodified.
    ///
    /// Identical URL strings always map to the same entry; URLs differing in
    /// any byte (trailing slash, query order) are distinct keys. No
    /// normalization is performed.
    pub fn key_for(&self, url: &str) -> String {
        url.to_string()
    }

    /// Read the bytes stored under `key`, or `None` on a miss.
    ///
    /// Absence is a normal outcome, not an error; an unreadable entry is
    /// logged and also reported as a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(key);
        match tokio::fs::read(&path).await {
            Ok(data) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key, size = data.len(), "cache hit");
                Some(data)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Err(e) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                warn!(key, error = %e, "failed to read cache entry");
                None
            }
        }
    }

    /// Write `data` under `key`, replacing any previous entry.
    ///
    /// The bytes land in a temp file first and are renamed into place;
    /// concurrent writers to the same key are last-writer-wins.
    pub async fn put(&self, key: &str, data: &[u8]) -> io::Result<()> {
        let path = self.entry_path(key);
        let tmp = self.tmp_path(&path);

        tokio::fs::write(&tmp, data).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e);
        }

        debug!(key, size = data.len(), "cache entry written");
        Ok(())
    }

    /// Entry count, byte total, and hit/miss counters.
    pub async fn stats(&self) -> CacheStats {
        let mut entries = 0;
        let mut total_bytes = 0;

        if let Ok(mut dir) = tokio::fs::read_dir(&self.cache_dir).await {
            while let Ok(Some(entry)) = dir.next_entry().await {
                if entry.file_name().to_string_lossy().contains(".tmp.") {
                    continue;
                }
                if let Ok(meta) = entry.metadata().await {
                    if meta.is_file() {
                        entries += 1;
                        total_bytes += meta.len();
                    }
                }
            }
        }

        CacheStats {
            entries,
            total_bytes,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.cache_dir.join(hex::encode(digest))
    }

    /// Temp path unique to this writer, so racing writers on one key never
    /// share a partially written file.
    fn tmp_path(&self, entry: &Path) -> PathBuf {
        let seq = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let mut name = entry.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".tmp.{}.{}", std::process::id(), seq));
        entry.with_file_name(name)
    }
}
