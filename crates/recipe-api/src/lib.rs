//! Rust client for the recipe catalog endpoint
//!
//! Fetches and decodes the catalog document, a JSON object with a single
//! `recipes` array. Three fixed variants of the document exist (full,
//! syntactically malformed, empty) and are exposed as associated consts on
//! the client.
//!
//! # Example
//!
//! ```no_run
//! use recipe_api::CatalogClient;
//!
//! # async fn example() -> Result<(), recipe_api::CatalogError> {
//! let client = CatalogClient::new();
//!
//! let recipes = client.fetch_recipes(CatalogClient::RECIPES_URL).await?;
//! for recipe in recipes {
//!     println!("{} ({})", recipe.name, recipe.cuisine);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A malformed document fails with [`CatalogError::Json`], distinct from the
//! transport variants, so callers can tell "malformed data" apart from
//! "network unavailable".

mod client;
mod error;
mod types;

pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use types::{Recipe, RecipeResponse};
