//! Search session state container.

use store_data::{FetchError, ProductSearchApi};
use store_search::{FilterDimension, FilterSelection, Product, SearchQuery};

use crate::log::SessionLogger;
use crate::state::{FetchTicket, RequestKind, RequestState};

/// State behind one storefront search view.
///
/// Owns the query string, the last successfully fetched product list, the
/// active filter selection, and the request lifecycle. All state is transient
/// and scoped to the view; dropping the session discards it.
///
/// The session exposes two layers:
///
/// - **events** ([`begin_fetch`](Self::begin_fetch) /
///   [`begin_apply_filters`](Self::begin_apply_filters) /
///   [`begin_clear_filters`](Self::begin_clear_filters) /
///   [`complete`](Self::complete)) — synchronous state transitions that hand
///   out a [`FetchTicket`] to execute and accept its outcome;
/// - **drivers** ([`fetch_products`](Self::fetch_products) /
///   [`apply_filters_remote`](Self::apply_filters_remote) /
///   [`clear_filters`](Self::clear_filters) / [`retry`](Self::retry)) —
///   async wrappers that run a ticket against a [`ProductSearchApi`].
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    products: Vec<Product>,
    selection: FilterSelection,
    state: RequestState,
    latest_seq: u64,
    expanded: Vec<FilterDimension>,
    logger: SessionLogger,
}

impl SearchSession {
    /// Create a session for a query string.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            products: Vec::new(),
            selection: FilterSelection::new(),
            state: RequestState::Idle,
            latest_seq: 0,
            // The category section starts open, the rest collapsed.
            expanded: vec![FilterDimension::Category],
            logger: SessionLogger::default(),
        }
    }

    /// Replace the session logger.
    pub fn with_logger(mut self, logger: SessionLogger) -> Self {
        self.logger = logger;
        self
    }

    /// The current query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query string.
    ///
    /// Only stores the text; submitting it is a separate event
    /// ([`begin_fetch`](Self::begin_fetch)).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The last successfully fetched product list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The active filter selection.
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The request lifecycle state.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    // === Events ===

    /// Issue a plain search for the current query.
    ///
    /// Returns the ticket to execute, or `None` when the query is blank
    /// (whitespace-only queries are ignored). Issuing a new request while one
    /// is outstanding supersedes it: the older completion will be discarded.
    /// The retry affordance of the error banner re-invokes this with the
    /// unchanged query.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let query = SearchQuery::for_text(self.query.clone());
        self.begin(RequestKind::Search, query)
    }

    /// Issue a server-side filter application for the current selection.
    pub fn begin_apply_filters(&mut self) -> Option<FetchTicket> {
        let query = SearchQuery::from_selection(self.query.clone(), &self.selection);
        self.begin(RequestKind::ApplyFilters, query)
    }

    /// Reset all filter dimensions and issue a plain re-fetch, falling back
    /// to the server's unfiltered result set.
    pub fn begin_clear_filters(&mut self) -> Option<FetchTicket> {
        self.selection.clear();
        self.begin_fetch()
    }

    /// Apply the outcome of an issued request.
    ///
    /// A completion whose sequence number has been superseded is discarded
    /// silently: a slow early response never overwrites a newer one. On
    /// success the product list is replaced wholesale and any error cleared;
    /// on failure the last-known-good list stays visible, the selection is
    /// untouched, and a generic user-facing message is surfaced.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<Product>, FetchError>) {
        if ticket.seq != self.latest_seq {
            self.logger
                .debug_builder("stale response discarded")
                .field_i64("seq", ticket.seq as i64)
                .field_i64("latest", self.latest_seq as i64)
                .emit();
            return;
        }

        match result {
            Ok(products) => {
                self.logger
                    .info_builder("search results applied")
                    .field_i64("seq", ticket.seq as i64)
                    .field_i64("count", products.len() as i64)
                    .emit();
                self.products = products;
                self.state = RequestState::Idle;
            }
            Err(err) => {
                self.logger
                    .error_builder("search request failed")
                    .field_i64("seq", ticket.seq as i64)
                    .field("kind", ticket.kind.as_str())
                    .field("error", err.to_string())
                    .emit();
                self.state = RequestState::Error(ticket.kind.failure_message().to_string());
            }
        }
    }

    /// Toggle a filter token. Pure local state; no network call, no
    /// request-state change, other dimensions unaffected.
    pub fn toggle_filter(&mut self, dimension: FilterDimension, token: impl Into<String>) {
        self.selection.toggle(dimension, token);
    }

    /// The visible subset of the last-fetched list under the current
    /// selection, in fetch order.
    pub fn visible_products(&self) -> Vec<Product> {
        self.selection.filter_products(&self.products)
    }

    /// Toggle a filter panel section open or closed.
    pub fn toggle_section(&mut self, dimension: FilterDimension) {
        if let Some(pos) = self.expanded.iter().position(|d| *d == dimension) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(dimension);
        }
    }

    /// Whether a filter panel section is open.
    pub fn is_expanded(&self, dimension: FilterDimension) -> bool {
        self.expanded.contains(&dimension)
    }

    // === Drivers ===

    /// Run a plain search for the current query and apply the outcome.
    pub async fn fetch_products<A: ProductSearchApi>(&mut self, api: &A) {
        if let Some(ticket) = self.begin_fetch() {
            self.run(api, ticket).await;
        }
    }

    /// Apply the current selection server-side and apply the outcome.
    pub async fn apply_filters_remote<A: ProductSearchApi>(&mut self, api: &A) {
        if let Some(ticket) = self.begin_apply_filters() {
            self.run(api, ticket).await;
        }
    }

    /// Reset all filters and re-fetch the unfiltered result set.
    pub async fn clear_filters<A: ProductSearchApi>(&mut self, api: &A) {
        if let Some(ticket) = self.begin_clear_filters() {
            self.run(api, ticket).await;
        }
    }

    /// Retry the plain search with the unchanged query.
    pub async fn retry<A: ProductSearchApi>(&mut self, api: &A) {
        self.fetch_products(api).await;
    }

    /// Execute an issued ticket against the API and apply its outcome.
    pub async fn run<A: ProductSearchApi>(&mut self, api: &A, ticket: FetchTicket) {
        let result = api.search(&ticket.query).await;
        self.complete(ticket, result);
    }

    fn begin(&mut self, kind: RequestKind, query: SearchQuery) -> Option<FetchTicket> {
        if self.query.trim().is_empty() {
            return None;
        }

        self.latest_seq += 1;
        self.state = RequestState::Loading;
        self.logger
            .info_builder("search request issued")
            .field("kind", kind.as_str())
            .field_i64("seq", self.latest_seq as i64)
            .field("q", self.query.as_str())
            .emit();

        Some(FetchTicket {
            seq: self.latest_seq,
            kind,
            query,
        })
    }
}
