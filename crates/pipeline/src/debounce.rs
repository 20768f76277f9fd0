//! Debounced values.
//!
//! A [`Debouncer`] lags its source by a fixed quiescence window: bursts of
//! rapid updates collapse into one downstream publication. The initial
//! value is published immediately; every later update cancels and
//! reschedules the pending publication. Dropping the debouncer tears the
//! worker down without firing anything late.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tracing::trace;

/// Default quiescence window.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

enum Command<T> {
    Update(T),
    SetDelay(Duration),
}

/// A value that follows its source after a quiescence window.
///
/// Spawns a worker task on the current tokio runtime; `new` must therefore
/// be called from within one.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<Command<T>>,
    output: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> Debouncer<T> {
    /// Create a debouncer holding `initial` (published immediately).
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (out_tx, output) = watch::channel(initial);

        tokio::spawn(run(rx, out_tx, delay));

        Self { tx, output }
    }

    /// Feed a new source value. Any pending publication is cancelled and
    /// rescheduled a full delay from now.
    pub fn update(&self, value: T) {
        let _ = self.tx.send(Command::Update(value));
    }

    /// Change the quiescence window. A publication already scheduled keeps
    /// its old deadline; the new delay applies from the next update on.
    pub fn set_delay(&self, delay: Duration) {
        let _ = self.tx.send(Command::SetDelay(delay));
    }

    /// The most recently published value.
    pub fn current(&self) -> T {
        self.output.borrow().clone()
    }

    /// A receiver that observes every publication.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.clone()
    }
}

/// Worker loop: wait for the first update of a burst, then keep pushing the
/// deadline back while further updates arrive. When the channel closes the
/// loop exits without publishing whatever was pending.
async fn run<T>(
    mut rx: mpsc::UnboundedReceiver<Command<T>>,
    out_tx: watch::Sender<T>,
    mut delay: Duration,
) {
    'idle: loop {
        // Idle: no publication scheduled.
        let mut value = loop {
            match rx.recv().await {
                Some(Command::Update(value)) => break value,
                Some(Command::SetDelay(new_delay)) => delay = new_delay,
                None => return,
            }
        };

        let sleep = time::sleep(delay);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => {
                    trace!("debounce window elapsed, publishing");
                    let _ = out_tx.send(value);
                    continue 'idle;
                }
                command = rx.recv() => match command {
                    Some(Command::Update(next)) => {
                        value = next;
                        sleep.as_mut().reset(Instant::now() + delay);
                    }
                    Some(Command::SetDelay(new_delay)) => delay = new_delay,
                    None => return,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn advance_ms(ms: u64) {
        time::advance(Duration::from_millis(ms)).await;
        // Let the worker observe queued commands and expired timers.
        tokio::task::yield_now().await;
    }

    async fn settle() {
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_value_is_published_immediately() {
        let debouncer = Debouncer::new("initial".to_string(), DEFAULT_DEBOUNCE);
        assert_eq!(debouncer.current(), "initial");
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_publishes_once_after_quiescence() {
        let debouncer = Debouncer::new("initial".to_string(), Duration::from_millis(300));

        // Updates at t=0, t=100, t=200 with final value "abc".
        debouncer.update("a".to_string());
        settle().await;
        advance_ms(100).await;
        debouncer.update("ab".to_string());
        settle().await;
        advance_ms(100).await;
        debouncer.update("abc".to_string());
        settle().await;

        // t=499: still quiet for only 299ms since the last update.
        advance_ms(299).await;
        assert_eq!(debouncer.current(), "initial");

        // t=500: the window has elapsed.
        advance_ms(1).await;
        settle().await;
        assert_eq!(debouncer.current(), "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_resets_the_pending_window() {
        let debouncer = Debouncer::new(0u32, Duration::from_millis(300));

        debouncer.update(1);
        settle().await;
        advance_ms(299).await;
        assert_eq!(debouncer.current(), 0);

        // The reschedule pushes the deadline back to t=599.
        debouncer.update(2);
        settle().await;
        advance_ms(299).await;
        assert_eq!(debouncer.current(), 0, "value 1 was never published");

        advance_ms(1).await;
        settle().await;
        assert_eq!(debouncer.current(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_a_pending_publication() {
        let debouncer = Debouncer::new("initial".to_string(), Duration::from_millis(300));
        let mut subscriber = debouncer.subscribe();

        debouncer.update("late".to_string());
        settle().await;
        drop(debouncer);
        settle().await;

        advance_ms(1000).await;
        settle().await;

        assert_eq!(*subscriber.borrow(), "initial", "no late update fires after teardown");
        assert!(
            subscriber.changed().await.is_err(),
            "the worker is gone once the handle is dropped"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_delay_applies_to_the_next_publication() {
        let debouncer = Debouncer::new(0u32, Duration::from_millis(300));

        debouncer.update(1);
        settle().await;
        // Shrinking the delay does not move the already-scheduled deadline.
        debouncer.set_delay(Duration::from_millis(50));
        settle().await;
        advance_ms(299).await;
        assert_eq!(debouncer.current(), 0);
        advance_ms(1).await;
        settle().await;
        assert_eq!(debouncer.current(), 1);

        // The next burst uses the shorter window.
        debouncer.update(2);
        settle().await;
        advance_ms(50).await;
        settle().await;
        assert_eq!(debouncer.current(), 2);
    }
}
