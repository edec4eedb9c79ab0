//! Data types for the recipe catalog document

use serde::{Deserialize, Serialize};

/// A single recipe from the catalog.
///
/// Wire names are snake_case and match the field names directly. The photo
/// and link fields are optional in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub cuisine: String,
    pub name: String,
    pub photo_url_large: Option<String>,
    pub photo_url_small: Option<String>,
    pub source_url: Option<String>,
    pub uuid: String,
    pub youtube_url: Option<String>,
}

/// Top-level catalog document: `{ "recipes": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeResponse {
    pub recipes: Vec<Recipe>,
}
