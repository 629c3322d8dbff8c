//! Request lifecycle types.

use store_search::SearchQuery;

/// Lifecycle of the view's single logical request slot.
///
/// `Idle → Loading` when a request is issued, `Loading → Idle` on success,
/// `Loading → Error` on failure; a retry (or any new request) moves back to
/// `Loading`. A newer request supersedes an outstanding one instead of
/// running alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No request outstanding.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last request failed; the message is user-facing.
    Error(String),
}

impl RequestState {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RequestState::Error(_))
    }

    /// The user-facing error message, if in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// The kind of request a ticket was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Plain text search.
    Search,
    /// Server-side filter application.
    ApplyFilters,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Search => "search",
            RequestKind::ApplyFilters => "apply_filters",
        }
    }

    /// Generic user-facing message shown when a request of this kind fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            RequestKind::Search => "Failed to fetch products. Please try again.",
            RequestKind::ApplyFilters => "Failed to apply filters. Please try again.",
        }
    }
}

/// One issued request: its sequence number and the query to execute.
///
/// The sequence number decides whether the completion is still current when
/// it arrives; a ticket whose number has been superseded is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub kind: RequestKind,
    pub query: SearchQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_state_helpers() {
        assert!(RequestState::Idle.is_idle());
        assert!(RequestState::Loading.is_loading());

        let error = RequestState::Error("boom".to_string());
        assert!(error.is_error());
        assert_eq!(error.error_message(), Some("boom"));
        assert_eq!(RequestState::Idle.error_message(), None);
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            RequestKind::Search.failure_message(),
            "Failed to fetch products. Please try again."
        );
        assert_eq!(
            RequestKind::ApplyFilters.failure_message(),
            "Failed to apply filters. Please try again."
        );
    }
}
