//! View state for the list and detail screens.
//!
//! # Design
//! Every fetch a view starts is stamped with a [`Ticket`]. Only the latest
//! ticket may resolve the view, so when searches overlap a slow earlier
//! response cannot overwrite a faster later one. Failures collapse into a
//! fixed message and the view always leaves `Loading`.

use crate::error::ApiError;
use crate::query::search_params_for;
use crate::types::{CountryDetails, CountryRecord, SearchParams};

pub const LIST_ERROR: &str = "Failed to fetch countries";
pub const DETAIL_ERROR: &str = "Failed to fetch country details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Identifies one fetch issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Fetch<T> {
    state: ViewState<T>,
    issued: u64,
    pending: Option<Ticket>,
    error_message: &'static str,
}

impl<T> Fetch<T> {
    fn new(error_message: &'static str) -> Self {
        Self {
            state: ViewState::Idle,
            issued: 0,
            pending: None,
            error_message,
        }
    }

    fn begin(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        self.state = ViewState::Loading;
        ticket
    }

    fn clear(&mut self) {
        self.pending = None;
        self.state = ViewState::Idle;
    }

    fn resolve(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.state = match result {
            Ok(value) => ViewState::Success(value),
            Err(_) => ViewState::Error(self.error_message.to_string()),
        };
        true
    }
}

/// The searchable country list.
#[derive(Debug)]
pub struct ListView {
    fetch: Fetch<Vec<CountryRecord>>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            fetch: Fetch::new(LIST_ERROR),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<CountryRecord>> {
        &self.fetch.state
    }

    /// Countries to display; empty unless the last fetch succeeded.
    pub fn countries(&self) -> &[CountryRecord] {
        match &self.fetch.state {
            ViewState::Success(countries) => countries,
            _ => &[],
        }
    }

    /// Start a fetch whose request the caller picked, such as the full list
    /// or one region.
    pub fn load(&mut self) -> Ticket {
        self.fetch.begin()
    }

    /// Initial load on mount: an unfiltered search.
    pub fn mount(&mut self) -> (Ticket, SearchParams) {
        (self.load(), SearchParams::default())
    }

    /// React to a committed search value.
    ///
    /// A blank value clears the list and returns to `Idle` without a fetch;
    /// any fetch still in flight is abandoned. Only leading whitespace is
    /// stripped from the term that is sent, so `"France "` stays as typed.
    pub fn commit(&mut self, term: &str) -> Option<(Ticket, SearchParams)> {
        if term.trim().is_empty() {
            self.fetch.clear();
            return None;
        }
        Some((self.fetch.begin(), search_params_for(term.trim_start())))
    }

    /// Apply a finished fetch. Returns `false` if the ticket was superseded.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<CountryRecord>, ApiError>) -> bool {
        self.fetch.resolve(ticket, result)
    }
}

/// The detail page for one country.
#[derive(Debug)]
pub struct DetailView {
    fetch: Fetch<CountryDetails>,
    code: String,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            fetch: Fetch::new(DETAIL_ERROR),
            code: String::new(),
        }
    }

    pub fn state(&self) -> &ViewState<CountryDetails> {
        &self.fetch.state
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Enter the page for `code`. A blank code issues no fetch.
    pub fn enter(&mut self, code: &str) -> Option<Ticket> {
        self.code = code.trim().to_string();
        if self.code.is_empty() {
            self.fetch.clear();
            return None;
        }
        Some(self.fetch.begin())
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<CountryDetails, ApiError>) -> bool {
        self.fetch.resolve(ticket, result)
    }
}
