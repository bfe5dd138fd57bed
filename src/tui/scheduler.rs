//! # Error-Clear Scheduler
//!
//! Owns the one-shot timer that clears an error message from the display.
//!
//! Each error gets a generation number from the core. Scheduling aborts any
//! outstanding timer before spawning a new one, so at most one
//! `Action::ErrorTimeout` is in flight. The core also checks the generation,
//! so a timeout that slips through an abort is still ignored.

use log::{debug, warn};
use std::sync::mpsc;
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::core::action::Action;

pub struct ErrorClearScheduler {
    delay: Duration,
    tx: mpsc::Sender<Action>,
    pending: Option<AbortHandle>,
}

impl ErrorClearScheduler {
    pub fn new(delay: Duration, tx: mpsc::Sender<Action>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Replace any outstanding timer with one for `generation`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, generation: u64) {
        self.cancel();
        debug!(
            "Scheduling error clear for generation {} in {:?}",
            generation, self.delay
        );
        let tx = self.tx.clone();
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::ErrorTimeout { generation }).is_err() {
                warn!(
                    "Failed to deliver error timeout (generation {}): receiver dropped",
                    generation
                );
            }
        });
        self.pending = Some(task.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Cancelling outstanding error clear");
            }
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ErrorClearScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    #[tokio::test(start_paused = true)]
    async fn test_timeout_arrives_after_delay() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = ErrorClearScheduler::new(DELAY, tx);
        scheduler.schedule(1);
        assert!(scheduler.is_pending());

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv(), Ok(Action::ErrorTimeout { generation: 1 }));
        assert!(!scheduler.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_outstanding_timer() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = ErrorClearScheduler::new(DELAY, tx);
        scheduler.schedule(1);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        scheduler.schedule(2);

        // The first timer's deadline passes without a delivery
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(rx.try_recv(), Ok(Action::ErrorTimeout { generation: 2 }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_delivery() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = ErrorClearScheduler::new(DELAY, tx);
        scheduler.schedule(1);
        scheduler.cancel();
        assert!(!scheduler.is_pending());

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(rx.try_recv().is_err());
    }
}
