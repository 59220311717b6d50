//! Virtual-time scheduler for deterministic tests.

use std::time::Duration;

use super::{LoadTicket, Scheduler};

/// A scheduler driven by an explicit virtual clock.
///
/// Nothing happens until [`ManualScheduler::advance`] moves time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Option<(Duration, LoadTicket)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// The pending ticket and the virtual time it falls due.
    pub fn pending(&self) -> Option<(Duration, LoadTicket)> {
        self.pending
    }

    /// Move the clock forward and return the tickets that fell due.
    pub fn advance(&mut self, by: Duration) -> Vec<LoadTicket> {
        self.now = self.now.saturating_add(by);
        match self.pending {
            Some((due, ticket)) if due <= self.now => {
                self.pending = None;
                vec![ticket]
            }
            _ => Vec::new(),
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, ticket: LoadTicket, delay: Duration) {
        self.pending = Some((self.now.saturating_add(delay), ticket));
    }

    fn cancel(&mut self) {
        self.pending = None;
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_fires_after_delay() {
        let mut scheduler = ManualScheduler::new();
        let ticket = LoadTicket::new(0, 2);
        scheduler.schedule(ticket, Duration::from_millis(1000));

        assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
        assert!(scheduler.is_pending());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![ticket]);
        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.now(), Duration::from_millis(1000));
    }

    #[test]
    fn test_cancel_drops_ticket() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(LoadTicket::new(0, 2), Duration::from_millis(10));
        scheduler.cancel();

        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(LoadTicket::new(0, 2), Duration::from_millis(10));
        scheduler.schedule(LoadTicket::new(1, 2), Duration::from_millis(10));

        assert_eq!(
            scheduler.advance(Duration::from_millis(10)),
            vec![LoadTicket::new(1, 2)]
        );
    }
}
