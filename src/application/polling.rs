//! Interval polling with cancellation.
//!
//! Backs the queue-status refresh and the checkout countdown. The first tick
//! runs immediately, later ticks every `period`. Each tick's value is sent
//! to the [`Subscription`]; dropping the subscription stops the task.

use std::future::Future;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const UPDATE_BUFFER: usize = 16;

/// What a tick produced, and whether polling should go on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome<T> {
    Continue(T),
    /// Deliver this value, then stop.
    Finish(T),
}

/// Receiving end of a running poller.
pub struct Subscription<T> {
    updates: mpsc::Receiver<T>,
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl<T> Subscription<T> {
    /// Next value, or `None` once the poller has stopped.
    pub async fn next(&mut self) -> Option<T> {
        self.updates.recv().await
    }

    /// Stops the poller. Values already delivered stay readable.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs `tick` immediately and then every `period` until cancelled, the
/// subscription is dropped, or a tick returns [`TickOutcome::Finish`].
pub fn spawn_interval<T, F, Fut>(period: Duration, mut tick: F) -> Subscription<T>
where
    T: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = TickOutcome<T>> + Send + 'static,
{
    let (tx, updates) = mpsc::channel(UPDATE_BUFFER);
    let (cancel, mut cancelled) = watch::channel(false);
    // tokio panics on a zero period
    let period = period.max(Duration::from_millis(1));

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancelled.changed() => break,
                _ = ticker.tick() => {}
            }

            let outcome = tokio::select! {
                biased;
                _ = cancelled.changed() => break,
                outcome = tick() => outcome,
            };

            let (value, done) = match outcome {
                TickOutcome::Continue(value) => (value, false),
                TickOutcome::Finish(value) => (value, true),
            };
            // A reader that stopped draining must not block cancellation
            let sent = tokio::select! {
                biased;
                _ = cancelled.changed() => break,
                sent = tx.send(value) => sent.is_ok(),
            };
            if !sent || done {
                break;
            }
        }
        tracing::trace!("Poller stopped");
    });

    Subscription {
        updates,
        cancel,
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate_then_periodic() {
        let started = tokio::time::Instant::now();
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();

        let mut sub = spawn_interval(Duration::from_secs(5), move || {
            let c = c.clone();
            async move { TickOutcome::Continue(c.fetch_add(1, Ordering::SeqCst)) }
        });

        assert_eq!(sub.next().await, Some(0));
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(sub.next().await, Some(1));
        assert_eq!(started.elapsed(), Duration::from_secs(5));
        assert_eq!(sub.next().await, Some(2));
        assert_eq!(started.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn finish_delivers_last_value_and_stops() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();

        let mut sub = spawn_interval(Duration::from_secs(1), move || {
            let n = c.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 2 {
                    TickOutcome::Finish(n)
                } else {
                    TickOutcome::Continue(n)
                }
            }
        });

        assert_eq!(sub.next().await, Some(0));
        assert_eq!(sub.next().await, Some(1));
        assert_eq!(sub.next().await, Some(2));
        assert_eq!(sub.next().await, None);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticking() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();

        let mut sub = spawn_interval(Duration::from_secs(5), move || {
            let n = c.fetch_add(1, Ordering::SeqCst);
            async move { TickOutcome::Continue(n) }
        });

        assert_eq!(sub.next().await, Some(0));
        sub.cancel();
        assert_eq!(sub.next().await, None);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(sub.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_a_poller_whose_updates_are_not_read() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();

        let mut sub = spawn_interval(Duration::from_secs(1), move || {
            let n = c.fetch_add(1, Ordering::SeqCst);
            async move { TickOutcome::Continue(n) }
        });

        // Fill the buffer; the next tick's value is left waiting to be sent
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(counter.load(Ordering::SeqCst), UPDATE_BUFFER as u32 + 1);
        assert!(!sub.is_finished());

        sub.cancel();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(sub.is_finished());

        // Buffered values are still readable after the stop
        assert_eq!(sub.next().await, Some(0));
    }
}
