//! Dataset selection and runtime configuration

use recipe_api::CatalogClient;
use std::path::PathBuf;

/// Which catalog variant to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Normal,
    Malformed,
    Empty,
}

impl Dataset {
    /// Parse a dataset name as given on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "malformed" => Some(Self::Malformed),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Catalog endpoint for this dataset
    pub fn url(self) -> &'static str {
        match self {
            Self::Normal => CatalogClient::RECIPES_URL,
            Self::Malformed => CatalogClient::RECIPES_MALFORMED_URL,
            Self::Empty => CatalogClient::RECIPES_EMPTY_URL,
        }
    }
}

/// Runtime configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cache_dir: PathBuf,
    pub prefetch_concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("./cache/images"),
            prefetch_concurrency: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_parse() {
        assert_eq!(Dataset::parse("normal"), Some(Dataset::Normal));
        assert_eq!(Dataset::parse("malformed"), Some(Dataset::Malformed));
        assert_eq!(Dataset::parse("empty"), Some(Dataset::Empty));
        assert_eq!(Dataset::parse("surprise"), None);
    }

    #[test]
    fn test_dataset_urls_are_distinct() {
        assert!(Dataset::Normal.url().ends_with("recipes.json"));
        assert!(Dataset::Malformed.url().ends_with("recipes-malformed.json"));
        assert!(Dataset::Empty.url().ends_with("recipes-empty.json"));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.cache_dir, PathBuf::from("./cache/images"));
        assert_eq!(config.prefetch_concurrency, 8);
    }
}
