//! Deferred completion of load-more requests.
//!
//! A query session never waits on its own: it hands a [`LoadTicket`] to a
//! [`Scheduler`] and is told later that the ticket is due. Tests drive time
//! with [`ManualScheduler`]; the CLI uses [`TimerScheduler`] on tokio.

mod manual;
mod timer;

pub use manual::ManualScheduler;
pub use timer::TimerScheduler;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one in-flight page load.
///
/// `generation` is the session's term generation when the load was issued; a
/// completion whose generation no longer matches is stale and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    /// Term generation the load belongs to.
    pub generation: u64,
    /// 1-indexed page being loaded.
    pub page: usize,
}

impl LoadTicket {
    pub fn new(generation: u64, page: usize) -> Self {
        Self { generation, page }
    }
}

/// Delivers a ticket back to its session after a delay.
///
/// Sessions keep at most one ticket outstanding, so implementations only need
/// to track the latest one.
pub trait Scheduler {
    /// Arrange for `ticket` to become due after `delay`, replacing any
    /// pending ticket.
    fn schedule(&mut self, ticket: LoadTicket, delay: Duration);

    /// Drop the pending ticket, if any.
    fn cancel(&mut self);

    /// Whether a ticket is waiting to become due.
    fn is_pending(&self) -> bool;
}
