//! Cache-first image fetching
//!
//! Wraps an HTTP client around a [`file_image_cache::FileImageCache`]: a
//! fetch serves cached bytes when present, otherwise downloads the image,
//! validates that the bytes decode, and writes them through to the cache.
//! Safe to call concurrently for many URLs at once.
//!
//! # Example
//!
//! ```no_run
//! use file_image_cache::FileImageCache;
//! use image_fetcher::ImageFetcher;
//!
//! # async fn example() {
//! let cache = FileImageCache::new("./cache/images");
//! cache.init().await.expect("create cache directory");
//!
//! let fetcher = ImageFetcher::new(cache);
//! let bytes = fetcher
//!     .fetch_image("https://example.com/photo.jpg")
//!     .await
//!     .expect("fetch photo");
//! # }
//! ```

mod error;
mod fetcher;

pub use error::{FetchError, Result};
pub use fetcher::ImageFetcher;
