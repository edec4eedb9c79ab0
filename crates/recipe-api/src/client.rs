//! Recipe catalog HTTP client

use crate::error::{CatalogError, Result};
use crate::types::{Recipe, RecipeResponse};
use std::time::Duration;
use url::Url;

/// Client for the recipe catalog endpoint
///
/// Performs a one-shot GET of a catalog document and decodes its `recipes`
/// array. Transport failures and malformed documents surface as distinct
/// error variants.
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    /// Catalog with the full recipe set
    pub const RECIPES_URL: &'static str = "https://d3jbb8n5wk0qxi.cloudfront.net/recipes.json";
    /// Catalog variant whose body is syntactically invalid JSON
    pub const RECIPES_MALFORMED_URL: &'static str =
        "https://d3jbb8n5wk0qxi.cloudfront.net/recipes-malformed.json";
    /// Catalog variant with an empty recipe list
    pub const RECIPES_EMPTY_URL: &'static str =
        "https://d3jbb8n5wk0qxi.cloudfront.net/recipes-empty.json";

    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { http }
    }

    /// Fetch and decode the catalog at `url`.
    ///
    /// An empty `recipes` array is a success with an empty list. A body that
    /// does not decode fails with [`CatalogError::Json`]; connection and
    /// status problems fail with [`CatalogError::Http`] and
    /// [`CatalogError::Status`].
    pub async fn fetch_recipes(&self, url: &str) -> Result<Vec<Recipe>> {
        let url = Url::parse(url).map_err(|_| CatalogError::InvalidUrl(url.to_string()))?;

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        // Decode from the raw body so a malformed document classifies as
        // Json, not as a transport error.
        let body = response.bytes().await?;
        let catalog: RecipeResponse = serde_json::from_slice(&body)?;

        Ok(catalog.recipes)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{routing::get, Router};
    use tokio::net::TcpListener;

    const SAMPLE: &str = r#"{
        "recipes": [
            {
                "cuisine": "American",
                "name": "Krispy Kreme Donut",
                "photo_url_large": "https://d3jbb8n5wk0qxi.cloudfront.net/photos/def8c76f-9054-40ff-8021-7f39148ad4b7/large.jpg",
                "photo_url_small": "https://d3jbb8n5wk0qxi.cloudfront.net/photos/def8c76f-9054-40ff-8021-7f39148ad4b7/small.jpg",
                "source_url": "https://www.mythirtyspot.com/krispy-kreme-copycat-recipe-for/",
                "uuid": "9e230f96-f93d-4d29-9230-a1f5fd539464",
                "youtube_url": "https://www.youtube.com/watch?v=SamYg6IUGOI"
            }
        ]
    }"#;

    /// Serve `router` on an ephemeral localhost port, returning the base URL
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_fetch_recipes_success() {
        let base = serve(Router::new().route("/recipes.json", get(|| async { SAMPLE }))).await;
        let client = CatalogClient::new();

        let recipes = client
            .fetch_recipes(&format!("{base}/recipes.json"))
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Krispy Kreme Donut");
        assert_eq!(recipes[0].cuisine, "American");
    }

    #[tokio::test]
    async fn test_fetch_recipes_empty_document() {
        let base =
            serve(Router::new().route("/recipes.json", get(|| async { r#"{"recipes": []}"# })))
                .await;
        let client = CatalogClient::new();

        let recipes = client
            .fetch_recipes(&format!("{base}/recipes.json"))
            .await
            .unwrap();

        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_document_is_a_json_error() {
        // Truncated body, as served by the malformed catalog variant
        let base = serve(Router::new().route(
            "/recipes.json",
            get(|| async { r#"[{"name": "Pasta", "cuisine": "Italian""# }),
        ))
        .await;
        let client = CatalogClient::new();

        let err = client
            .fetch_recipes(&format!("{base}/recipes.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_status_error() {
        let base = serve(Router::new().route(
            "/recipes.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
        ))
        .await;
        let client = CatalogClient::new();

        let err = client
            .fetch_recipes(&format!("{base}/recipes.json"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, CatalogError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[tokio::test]
    async fn test_unparsable_url_fails_fast() {
        let client = CatalogClient::new();

        let err = client.fetch_recipes("not a url").await.unwrap_err();

        assert!(matches!(err, CatalogError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_an_http_error() {
        // Bind and immediately drop a listener so the port is closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CatalogClient::new();
        let err = client
            .fetch_recipes(&format!("http://{addr}/recipes.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Http(_)));
    }
}
