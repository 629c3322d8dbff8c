//! Product search domain types and logic for StoreSearch.
//!
//! This crate provides the headless core of the storefront search view:
//!
//! - **Product**: the item model returned by the Search API
//! - **Filters**: the four filter dimensions, token selections, and the pure
//!   client-side filtering derivation
//! - **Query**: the query plan sent to the Search API for server-side filtering
//!
//! # Example
//!
//! ```rust,ignore
//! use store_search::prelude::*;
//!
//! let mut selection = FilterSelection::new();
//! selection.toggle(FilterDimension::Category, "smartphones");
//! selection.toggle(FilterDimension::Price, "500-2000");
//!
//! // Client-side filtering over the last-fetched list
//! let visible = selection.filter_products(&products);
//!
//! // Server-side filtering via the Search API
//! let query = SearchQuery::from_selection("phone", &selection);
//! ```

pub mod error;
pub mod filter;
pub mod product;
pub mod query;

pub use error::SearchError;
pub use filter::{FilterDimension, FilterSelection, PriceRange};
pub use product::Product;
pub use query::{SearchQuery, SortOption};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::SearchError;
    pub use crate::filter::{FilterDimension, FilterSelection, PriceRange};
    pub use crate::product::Product;
    pub use crate::query::{SearchQuery, SortOption};
}
