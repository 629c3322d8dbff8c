//! Search domain error types.

use thiserror::Error;

/// Errors that can occur in search domain operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Price range token could not be parsed.
    #[error("Invalid price range token: {0}")]
    InvalidPriceRange(String),
}
