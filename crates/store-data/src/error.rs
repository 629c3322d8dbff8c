//! Search API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Search API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-2xx response status. The response body is not inspected.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// Transport-level failure.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response body could not be parsed.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Request could not be built or sent.
    #[error("Request error: {0}")]
    Request(String),
}
