//! Error types for the platefetch CLI

use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Catalog(recipe_api::CatalogError),
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Catalog(err) => write!(f, "Catalog error: {}", err),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<recipe_api::CatalogError> for AppError {
    fn from(err: recipe_api::CatalogError) -> Self {
        AppError::Catalog(err)
    }
}

impl From<tracing_subscriber::filter::ParseError> for AppError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
