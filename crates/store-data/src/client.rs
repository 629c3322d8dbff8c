//! Search API client.

use async_trait::async_trait;

use store_search::{Product, SearchQuery};

use crate::response::Response;
use crate::url::search_url;
use crate::FetchError;

/// Access to the external product Search API.
///
/// The search view talks to the API through this trait so tests can
/// substitute canned results for the network.
#[async_trait]
pub trait ProductSearchApi: Send + Sync {
    /// Run one search request and return the matching products.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Product>, FetchError>;
}

/// HTTP client for the Search API.
pub struct SearchClient {
    base_url: String,
}

impl SearchClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET request and return the response.
    #[cfg(target_arch = "wasm32")]
    async fn send_get(&self, url: &str) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method, Request};

        let request = Request::builder()
            .method(Method::Get)
            .uri(url)
            .header("accept", "application/json")
            .build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = *response.status();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(Response::new(status, headers, response.into_body(), url))
    }

    /// Send a GET request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    async fn send_get(&self, url: &str) -> Result<Response, FetchError> {
        // Empty result set for non-WASM builds (testing/development)
        Ok(Response::new(
            200,
            std::collections::HashMap::new(),
            b"[]".to_vec(),
            url,
        ))
    }
}

#[async_trait]
impl ProductSearchApi for SearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Product>, FetchError> {
        let url = search_url(&self.base_url, query);
        let response = self.send_get(&url).await?;
        response.error_for_status()?.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_base_url() {
        let client = SearchClient::new("https://localhost:7151");
        assert_eq!(client.base_url(), "https://localhost:7151");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_stub_transport_returns_empty_result_set() {
        let client = SearchClient::new("https://localhost:7151");
        let query = SearchQuery::for_text("phone");
        let products = futures::executor::block_on(client.search(&query)).unwrap();
        assert!(products.is_empty());
    }
}
