//! platefetch - list a recipe catalog and prefetch its photos
//!
//! Fetches one of the three catalog variants (normal, malformed, empty),
//! prints the recipes, and downloads every recipe photo into a persistent
//! disk cache so later runs serve them without network access. Malformed
//! catalog data is reported distinctly from network failures.

mod error;
mod types;

use crate::error::{AppError, Result};
use crate::types::{AppConfig, Dataset};
use file_image_cache::FileImageCache;
use image_fetcher::ImageFetcher;
use recipe_api::{CatalogClient, CatalogError, Recipe};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("platefetch=info".parse()?)
        .add_directive("image_fetcher=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let dataset = parse_dataset()?;
    let config = load_config();
    info!("Dataset: {:?}", dataset);
    info!("Cache dir: {:?}", config.cache_dir);

    let cache = FileImageCache::new(config.cache_dir.clone());
    if let Err(e) = cache.init().await {
        warn!(error = %e, "failed to create cache directory; photos will not be cached");
    }
    let fetcher = Arc::new(ImageFetcher::new(cache));

    let client = CatalogClient::new();
    let recipes = match client.fetch_recipes(dataset.url()).await {
        Ok(recipes) => recipes,
        Err(err @ CatalogError::Json(_)) => {
            eprintln!("Malformed data: {err}");
            return Err(err.into());
        }
        Err(err) => {
            eprintln!("Failed to fetch recipes: {err}");
            return Err(err.into());
        }
    };

    if recipes.is_empty() {
        println!("No recipes in catalog");
        return Ok(());
    }

    for recipe in &recipes {
        println!("{} ({})", recipe.name, recipe.cuisine);
    }

    prefetch_photos(&recipes, Arc::clone(&fetcher), config.prefetch_concurrency).await;

    let stats = fetcher.cache().stats().await;
    info!(
        entries = stats.entries,
        total_bytes = stats.total_bytes,
        hits = stats.hits,
        misses = stats.misses,
        "cache stats"
    );

    Ok(())
}

/// Download every recipe photo through the shared fetcher, a bounded number
/// at a time. Per-photo failures are warnings; the run continues.
async fn prefetch_photos(recipes: &[Recipe], fetcher: Arc<ImageFetcher>, concurrency: usize) {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    let mut tasks = Vec::new();
    for recipe in recipes {
        let Some(url) = photo_url(recipe) else {
            continue;
        };
        let url = url.to_string();
        let name = recipe.name.clone();
        let fetcher = Arc::clone(&fetcher);
        let semaphore = Arc::clone(&semaphore);

        tasks.push(tokio::spawn(async move {
            let _permit = semaphore.acquire().await.unwrap();
            match fetcher.fetch_image(&url).await {
                Ok(bytes) => info!(recipe = %name, size = bytes.len(), "photo ready"),
                Err(e) => warn!(recipe = %name, url = %url, error = %e, "photo fetch failed"),
            }
        }));
    }

    futures::future::join_all(tasks).await;
}

/// The photo to prefetch for a recipe: the small rendition, falling back to
/// the large one
fn photo_url(recipe: &Recipe) -> Option<&str> {
    recipe
        .photo_url_small
        .as_deref()
        .or(recipe.photo_url_large.as_deref())
}

fn parse_dataset() -> Result<Dataset> {
    let Some(arg) = std::env::args().nth(1) else {
        return Ok(Dataset::Normal);
    };
    Dataset::parse(&arg).ok_or_else(|| {
        AppError::Config(format!(
            "unknown dataset {arg:?} (expected normal, malformed, or empty)"
        ))
    })
}

fn load_config() -> AppConfig {
    let cache_dir = std::env::var("CACHE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./cache/images"));

    let prefetch_concurrency = std::env::var("PREFETCH_CONCURRENCY")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(8);

    AppConfig {
        cache_dir,
        prefetch_concurrency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_url_prefers_small() {
        let recipe = Recipe {
            cuisine: "American".to_string(),
            name: "Donut".to_string(),
            photo_url_large: Some("https://example.com/large.jpg".to_string()),
            photo_url_small: Some("https://example.com/small.jpg".to_string()),
            source_url: None,
            uuid: "u".to_string(),
            youtube_url: None,
        };
        assert_eq!(photo_url(&recipe), Some("https://example.com/small.jpg"));
    }

    #[test]
    fn test_photo_url_falls_back_to_large() {
        let recipe = Recipe {
            cuisine: "American".to_string(),
            name: "Donut".to_string(),
            photo_url_large: Some("https://example.com/large.jpg".to_string()),
            photo_url_small: None,
            source_url: None,
            uuid: "u".to_string(),
            youtube_url: None,
        };
        assert_eq!(photo_url(&recipe), Some("https://example.com/large.jpg"));
    }

    #[test]
    fn test_photo_url_none_when_absent() {
        let recipe = Recipe {
            cuisine: "American".to_string(),
            name: "Donut".to_string(),
            photo_url_large: None,
            photo_url_small: None,
            source_url: None,
            uuid: "u".to_string(),
            youtube_url: None,
        };
        assert_eq!(photo_url(&recipe), None);
    }
}
