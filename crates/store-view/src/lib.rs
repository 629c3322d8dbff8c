//! Search view session and request lifecycle for StoreSearch.
//!
//! This crate owns the state behind the storefront search view: the query
//! string, the last-fetched product list, the active filter selection, and
//! the lifecycle of the view's single logical request. State transitions
//! happen on discrete events (submit, checkbox toggle, button click, request
//! completion); network calls never block the caller.
//!
//! A fetch sequence number tags every outgoing request. Completions carrying
//! a superseded sequence number are discarded, so only the most recent
//! request's result is ever shown even though in-flight requests are not
//! canceled.
//!
//! # Example
//!
//! ```rust,ignore
//! use store_data::SearchClient;
//! use store_search::FilterDimension;
//! use store_view::SearchSession;
//!
//! let api = SearchClient::new("https://localhost:7151");
//! let mut session = SearchSession::new("phone");
//!
//! session.fetch_products(&api).await;
//!
//! // Instant client-side filtering, no network
//! session.toggle_filter(FilterDimension::Category, "smartphones");
//! let visible = session.visible_products();
//!
//! // Authoritative server-side filtering
//! session.apply_filters_remote(&api).await;
//! ```

pub mod log;
pub mod session;
pub mod state;

pub use log::{LogFormat, LogLevel, SessionLogger};
pub use session::SearchSession;
pub use state::{FetchTicket, RequestKind, RequestState};
