//! Read-only snapshot of a query for rendering.

use serde::Serialize;

use crate::catalog::Product;

use super::results::Pagination;
use super::session::QuerySession;

/// What a product grid shows for the current query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryView<'a> {
    pub items: &'a [Product],
    pub loading: bool,
    pub has_more: bool,
    pub total_count: usize,
    pub term: &'a str,
    pub page: usize,
    pub page_size: usize,
}

/// Footer state of the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    /// Nothing matches the term.
    Empty,
    /// A page load is in flight.
    Loading,
    /// More pages can be requested.
    HasMore,
    /// Every match is shown.
    Exhausted,
}

/// The "N products" / "N results for X" line above the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultSummary {
    All { total: usize },
    Matches { term: String, total: usize },
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultSummary::All { total } => write!(f, "{} products", total),
            ResultSummary::Matches { term, total } => {
                write!(f, "{} results for \"{}\"", total, term)
            }
        }
    }
}

impl<'a> QueryView<'a> {
    pub(crate) fn from_session(session: &'a QuerySession) -> Self {
        Self {
            items: session.items(),
            loading: session.is_loading(),
            has_more: session.has_more(),
            total_count: session.total_count(),
            term: session.term(),
            page: session.page(),
            page_size: session.page_size(),
        }
    }

    pub fn status(&self) -> ListStatus {
        if self.total_count == 0 {
            ListStatus::Empty
        } else if self.loading {
            ListStatus::Loading
        } else if self.has_more {
            ListStatus::HasMore
        } else {
            ListStatus::Exhausted
        }
    }

    pub fn summary(&self) -> ResultSummary {
        let term = self.term.trim();
        if term.is_empty() {
            ResultSummary::All {
                total: self.total_count,
            }
        } else {
            ResultSummary::Matches {
                term: term.to_string(),
                total: self.total_count,
            }
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.total_count)
    }
}
