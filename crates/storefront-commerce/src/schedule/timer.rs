//! Wall-clock scheduler on the tokio runtime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{LoadTicket, Scheduler};

/// Fires tickets from a tokio timer task.
///
/// [`Scheduler::schedule`] must be called from within a tokio runtime.
#[derive(Debug)]
pub struct TimerScheduler {
    tx: mpsc::UnboundedSender<LoadTicket>,
    rx: mpsc::UnboundedReceiver<LoadTicket>,
    pending: Option<JoinHandle<()>>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: None,
        }
    }

    /// Wait for the next ticket to fall due.
    ///
    /// A ticket whose timer fired just before a cancel can still be returned
    /// here; the session's generation check discards it.
    pub async fn next_due(&mut self) -> Option<LoadTicket> {
        let ticket = self.rx.recv().await;
        if self.pending.as_ref().is_some_and(|handle| handle.is_finished()) {
            self.pending = None;
        }
        ticket
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TimerScheduler {
    fn schedule(&mut self, ticket: LoadTicket, delay: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the scheduler.
            let _ = tx.send(ticket);
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
