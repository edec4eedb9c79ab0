//! Error types for the recipe catalog client

use std::fmt;

/// Errors from fetching and decoding the recipe catalog
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog URL string does not parse; no request was attempted
    InvalidUrl(String),
    /// The request could not be completed (connection failure, timeout)
    Http(reqwest::Error),
    /// The endpoint answered with a non-success status
    Status(reqwest::StatusCode),
    /// The body was retrieved but is not a valid catalog document
    Json(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => write!(f, "Invalid catalog URL: {url}"),
            Self::Http(e) => write!(f, "Catalog HTTP error: {e}"),
            Self::Status(status) => write!(f, "Catalog endpoint returned status {status}"),
            Self::Json(e) => write!(f, "Catalog JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
