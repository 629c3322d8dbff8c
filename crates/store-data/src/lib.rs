//! Search API client for StoreSearch.
//!
//! Provides the HTTP layer between the search view and the external product
//! Search API, with URL building, automatic JSON handling, and typed fetch
//! errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use store_data::{ProductSearchApi, SearchClient};
//! use store_search::SearchQuery;
//!
//! let client = SearchClient::new("https://localhost:7151");
//!
//! // Plain text search
//! let products = client.search(&SearchQuery::for_text("phone")).await?;
//!
//! // Server-side filter application
//! let query = SearchQuery::from_selection("phone", &selection);
//! let products = client.search(&query).await?;
//! ```

mod client;
mod error;
mod response;
mod url;

pub use client::{ProductSearchApi, SearchClient};
pub use error::FetchError;
pub use response::Response;
pub use url::{search_url, SEARCH_PATH};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchError, ProductSearchApi, Response, SearchClient};
}
