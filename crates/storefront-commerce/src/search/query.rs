//! Catalog query driver.
//!
//! [`CatalogQuery`] owns a [`QuerySession`] and a [`Scheduler`]. It feeds user
//! actions into the reducer and turns the session's in-flight ticket into a
//! deferred completion.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::schedule::{LoadTicket, ManualScheduler, Scheduler, TimerScheduler};

use super::session::{QuerySession, SessionEvent};
use super::view::QueryView;

/// A live, paginated search over a catalog.
#[derive(Debug)]
pub struct CatalogQuery<S: Scheduler> {
    catalog: Arc<Catalog>,
    session: QuerySession,
    scheduler: S,
    load_delay: Duration,
}

impl<S: Scheduler> CatalogQuery<S> {
    /// Open a query on the empty term, page 1 already loaded.
    pub fn new(catalog: Arc<Catalog>, config: &StorefrontConfig, scheduler: S) -> Self {
        let session = QuerySession::new(&catalog, config.page_size);
        Self {
            catalog,
            session,
            scheduler,
            load_delay: config.load_delay(),
        }
    }

    fn apply(&mut self, event: SessionEvent) {
        let session = std::mem::take(&mut self.session);
        self.session = session.reduce(event, &self.catalog);
    }

    /// Replace the search term.
    ///
    /// A different term resets to page 1 and cancels any pending load.
    pub fn set_term(&mut self, term: impl Into<String>) {
        let before = self.session.generation();
        self.apply(SessionEvent::TermChanged(term.into()));
        if self.session.generation() != before {
            self.scheduler.cancel();
        }
    }

    /// Request the next page.
    ///
    /// Returns true when a load was scheduled; false while a load is already
    /// in flight or when every match is loaded.
    pub fn load_more(&mut self) -> bool {
        let was_loading = self.session.is_loading();
        self.apply(SessionEvent::LoadMoreRequested);
        if was_loading {
            return false;
        }
        match self.session.in_flight() {
            Some(ticket) => {
                tracing::debug!(page = ticket.page, generation = ticket.generation, "scheduling page load");
                self.scheduler.schedule(ticket, self.load_delay);
                true
            }
            None => false,
        }
    }

    /// Deliver a fired ticket.
    ///
    /// Returns true when the page was appended, false when it was stale.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        if !self.session.is_current(&ticket) {
            self.apply(SessionEvent::PageLoaded {
                ticket,
                items: Vec::new(),
            });
            return false;
        }
        let items = self.session.page_items(&ticket);
        self.apply(SessionEvent::PageLoaded { ticket, items });
        true
    }

    /// Snapshot of what a list view renders.
    pub fn view(&self) -> QueryView<'_> {
        QueryView::from_session(&self.session)
    }

    pub fn session(&self) -> &QuerySession {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl CatalogQuery<ManualScheduler> {
    /// Advance virtual time and deliver whatever fell due.
    ///
    /// Returns the number of pages appended.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.scheduler
            .advance(by)
            .into_iter()
            .filter(|ticket| self.complete(*ticket))
            .count()
    }
}

impl CatalogQuery<TimerScheduler> {
    /// Wait until the in-flight load (if any) lands.
    ///
    /// Returns true when a page was appended.
    pub async fn settle(&mut self) -> bool {
        while self.session.is_loading() {
            let Some(ticket) = self.scheduler.next_due().await else {
                return false;
            };
            if self.complete(ticket) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::search::ListStatus;

    fn query() -> CatalogQuery<ManualScheduler> {
        let catalog = Arc::new(seed::catalog().unwrap());
        CatalogQuery::new(catalog, &StorefrontConfig::default(), ManualScheduler::new())
    }

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn test_initial_view() {
        let query = query();
        let view = query.view();
        assert_eq!(view.items.len(), 8);
        assert_eq!(view.total_count, 20);
        assert!(view.has_more);
        assert!(!view.loading);
    }

    #[test]
    fn test_load_more_waits_for_delay() {
        let mut query = query();
        assert!(query.load_more());
        assert!(query.view().loading);

        assert_eq!(query.advance(Duration::from_millis(999)), 0);
        assert_eq!(query.view().items.len(), 8);

        assert_eq!(query.advance(Duration::from_millis(1)), 1);
        assert_eq!(query.view().items.len(), 16);
        assert!(!query.view().loading);
    }

    #[test]
    fn test_single_load_in_flight() {
        let mut query = query();
        assert!(query.load_more());
        assert!(!query.load_more());
        assert_eq!(query.advance(DELAY), 1);
        assert_eq!(query.view().items.len(), 16);
    }

    #[test]
    fn test_exhausted_query_ignores_load_more() {
        let mut query = query();
        query.load_more();
        query.advance(DELAY);
        query.load_more();
        query.advance(DELAY);
        assert_eq!(query.view().status(), ListStatus::Exhausted);

        assert!(!query.load_more());
        assert!(!query.scheduler().is_pending());
    }

    #[test]
    fn test_term_change_cancels_pending_load() {
        let mut query = query();
        query.load_more();
        query.set_term("تنیس");

        assert!(!query.scheduler().is_pending());
        assert_eq!(query.advance(DELAY), 0);
        assert_eq!(query.view().items.len(), 2);
        assert_eq!(query.view().total_count, 2);
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut query = query();
        query.load_more();
        let stale = query.session().in_flight().unwrap();
        query.set_term("توپ");

        assert!(!query.complete(stale));
        assert_eq!(query.view().items.len(), 8);
        assert_eq!(query.session().generation(), 1);
    }

    #[test]
    fn test_same_term_keeps_pending_load() {
        let mut query = query();
        query.load_more();
        query.set_term("");
        assert!(query.scheduler().is_pending());
        assert_eq!(query.advance(DELAY), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_query_settles() {
        let catalog = Arc::new(seed::catalog().unwrap());
        let mut query = CatalogQuery::new(catalog, &StorefrontConfig::default(), TimerScheduler::new());

        assert!(query.load_more());
        assert!(query.settle().await);
        assert_eq!(query.view().items.len(), 16);
        assert!(!query.settle().await);
    }
}
