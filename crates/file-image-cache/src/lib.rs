//! File-based image cache keyed by source URL
//!
//! Stores raw encoded image bytes on disk, one file per key, with atomic
//! writes and no expiry or eviction. Entries persist across process runs so
//! a photo is downloaded at most once.

mod cache;
mod types;

pub use cache::FileImageCache;
pub use types::CacheStats;
