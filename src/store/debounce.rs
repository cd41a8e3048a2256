//! Explicit cancellable scheduled tasks.

use std::time::Duration;

use tokio::task::JoinHandle;

/// A single pending delayed action.
///
/// Every `schedule` call aborts whatever was pending first, so the action
/// only ever fires for the most recent input. Dropping the debouncer cancels
/// the pending action with it.
#[derive(Debug, Default)]
pub struct Debouncer {
    handle: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending action and schedule `action` to run after `delay`.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule(Duration::from_millis(500), move || {
            let _ = tx.send("fired");
        });

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(rx.try_recv().unwrap(), "fired");
    }

    #[tokio::test(start_paused = true)]
    async fn test_does_not_fire_early() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule(Duration::from_millis(500), move || {
            let _ = tx.send("fired");
        });

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        let tx1 = tx.clone();
        debouncer.schedule(Duration::from_millis(500), move || {
            let _ = tx1.send("first");
        });
        tokio::time::sleep(Duration::from_millis(300)).await;

        debouncer.schedule(Duration::from_millis(500), move || {
            let _ = tx.send("second");
        });
        tokio::time::sleep(Duration::from_millis(600)).await;

        // Only the most recent action fires.
        assert_eq!(rx.try_recv().unwrap(), "second");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule(Duration::from_millis(500), move || {
            let _ = tx.send("fired");
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }
}
