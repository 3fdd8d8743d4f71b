// src/domain/search.rs

use crate::domain::filters::SearchFilters;
use crate::domain::listing::Property;
use crate::remote::{FetchListingsRequest, FetchListingsResponse, ListingSource, RemoteError};

/// Page size sent with every search.
pub const SEARCH_LIMIT: u32 = 24;

/// Shown when a failed search carries no message of its own.
pub const SEARCH_FALLBACK_ERROR: &str = "Unable to fetch listings. Please try again later.";

/// Identifies one issued search. Only the most recently issued ticket may
/// change the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Result lifecycle of the listing search on one page.
///
/// `has_searched` is separate from `is_loading` so "never searched" and
/// "searched, nothing found" render differently.
#[derive(Debug, Default)]
pub struct SearchState {
    listings: Vec<Property>,
    is_loading: bool,
    error: Option<String>,
    has_searched: bool,
    issued: u64,
}

/// The one thing the results area shows.
#[derive(Debug, PartialEq)]
pub enum SearchView<'a> {
    NotSearched,
    Loading,
    Error(&'a str),
    Empty,
    Listings(&'a [Property]),
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search: loading on, error cleared, a fresh ticket issued.
    pub fn begin(&mut self) -> SearchTicket {
        self.is_loading = true;
        self.error = None;
        self.has_searched = true;
        self.issued += 1;
        SearchTicket(self.issued)
    }

    /// Apply the outcome of the search identified by `ticket`.
    ///
    /// Returns false, leaving state untouched, when a newer search has been
    /// issued since. Otherwise loading always ends here whatever the outcome.
    pub fn finish(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<FetchListingsResponse, RemoteError>,
    ) -> bool {
        if ticket.0 != self.issued {
            log::debug!("discarding stale search #{} (latest #{})", ticket.0, self.issued);
            return false;
        }

        match outcome {
            Ok(FetchListingsResponse {
                error: Some(message),
                ..
            }) if !message.trim().is_empty() => {
                log::warn!("listing search returned an error: {message}");
                self.error = Some(message);
                self.listings.clear();
            }
            Ok(resp) => {
                self.listings = resp.listings.unwrap_or_default();
                self.error = None;
            }
            Err(err) => {
                log::warn!("listing search failed: {err}");
                self.error = Some(
                    err.structured_message()
                        .unwrap_or_else(|| SEARCH_FALLBACK_ERROR.to_string()),
                );
                self.listings.clear();
            }
        }

        self.is_loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn listings(&self) -> &[Property] {
        &self.listings
    }

    /// Loading wins over error, error over empty, empty over results.
    pub fn view(&self) -> SearchView<'_> {
        if !self.has_searched {
            SearchView::NotSearched
        } else if self.is_loading {
            SearchView::Loading
        } else if let Some(message) = &self.error {
            SearchView::Error(message)
        } else if self.listings.is_empty() {
            SearchView::Empty
        } else {
            SearchView::Listings(&self.listings)
        }
    }
}

/// Run one search against `source` and record the outcome in `state`.
pub fn run_search(state: &mut SearchState, source: &dyn ListingSource, filters: &SearchFilters) {
    let ticket = state.begin();
    let request = FetchListingsRequest::from_filters(filters, SEARCH_LIMIT);
    let outcome = source.fetch_listings(&request);
    state.finish(ticket, outcome);
}
