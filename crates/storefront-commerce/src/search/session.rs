//! Pagination session state machine.
//!
//! A [`QuerySession`] is an immutable value; [`QuerySession::reduce`] folds
//! one [`SessionEvent`] into the next session. All side effects (timers) live
//! in [`CatalogQuery`](super::CatalogQuery).

use crate::catalog::{Catalog, Product};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::schedule::LoadTicket;
use crate::search::{filter, has_more, page};

/// Inputs to the session state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The search term was edited.
    TermChanged(String),
    /// The user asked for the next page.
    LoadMoreRequested,
    /// A deferred page load completed.
    PageLoaded {
        ticket: LoadTicket,
        items: Vec<Product>,
    },
}

/// Pagination state for one search term.
///
/// `matches` is a snapshot of the filter result taken when the term was set,
/// so the total count cannot change mid-pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySession {
    term: String,
    page_size: usize,
    generation: u64,
    page: usize,
    matches: Vec<Product>,
    loaded: Vec<Product>,
    in_flight: Option<LoadTicket>,
}

impl QuerySession {
    /// Open a session on the empty term, already holding page 1.
    ///
    /// A zero page size is treated as one.
    pub fn new(catalog: &Catalog, page_size: usize) -> Self {
        Self::for_term(catalog, String::new(), page_size.max(1), 0)
    }

    fn for_term(catalog: &Catalog, term: String, page_size: usize, generation: u64) -> Self {
        let matches = filter(catalog.products(), &term);
        let loaded = page(&matches, page_size, 1).to_vec();
        Self {
            term,
            page_size,
            generation,
            page: 1,
            matches,
            loaded,
            in_flight: None,
        }
    }

    /// Fold one event into the session.
    pub fn reduce(self, event: SessionEvent, catalog: &Catalog) -> Self {
        match event {
            SessionEvent::TermChanged(term) => {
                if term == self.term {
                    return self;
                }
                let generation = self.generation.wrapping_add(1);
                tracing::debug!(term = %term, generation, "search term changed");
                Self::for_term(catalog, term, self.page_size, generation)
            }
            SessionEvent::LoadMoreRequested => {
                if let Some(ticket) = self.in_flight {
                    tracing::trace!(page = ticket.page, "load more ignored: already loading");
                    return self;
                }
                if !self.has_more() {
                    tracing::trace!(total = self.total_count(), "load more ignored: nothing left");
                    return self;
                }
                let ticket = LoadTicket::new(self.generation, self.page + 1);
                Self {
                    in_flight: Some(ticket),
                    ..self
                }
            }
            SessionEvent::PageLoaded { ticket, items } => {
                if self.in_flight != Some(ticket) {
                    tracing::debug!(
                        ticket_generation = ticket.generation,
                        generation = self.generation,
                        page = ticket.page,
                        "discarding stale page"
                    );
                    return self;
                }
                let mut loaded = self.loaded;
                loaded.extend(items);
                Self {
                    page: ticket.page,
                    loaded,
                    in_flight: None,
                    ..self
                }
            }
        }
    }

    /// The slice a ticket stands for, taken from this session's matches.
    pub fn page_items(&self, ticket: &LoadTicket) -> Vec<Product> {
        page(&self.matches, self.page_size, ticket.page).to_vec()
    }

    /// Whether `ticket` is the load this session is waiting for.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.in_flight.as_ref() == Some(ticket)
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Counter bumped on every term change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pages loaded so far.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Products loaded so far, in catalog order.
    pub fn items(&self) -> &[Product] {
        &self.loaded
    }

    /// Number of products matching the current term.
    pub fn total_count(&self) -> usize {
        self.matches.len()
    }

    pub fn has_more(&self) -> bool {
        has_more(self.loaded.len(), self.matches.len())
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<LoadTicket> {
        self.in_flight
    }
}

impl Default for QuerySession {
    fn default() -> Self {
        Self {
            term: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            generation: 0,
            page: 1,
            matches: Vec::new(),
            loaded: Vec::new(),
            in_flight: None,
        }
    }
}
