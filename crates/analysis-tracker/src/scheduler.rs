// crates/analysis-tracker/src/scheduler.rs
//! Repeating poll timer, at most one per tracker instance.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Owns the single repeating timer a tracker is allowed to have.
///
/// `arm` tears down the previous timer strictly before starting the new
/// one, so re-binding to a new subject is one auditable operation and no
/// two timers ever coexist. The tick closure captures its subject at arm
/// time; an in-flight tick from a disarmed timer can still land, which is
/// why the store applies its staleness guard at application time.
pub struct PollScheduler {
    timer: Mutex<Option<CancellationToken>>,
}

impl PollScheduler {
    pub fn new() -> Self {
        Self {
            timer: Mutex::new(None),
        }
    }

    /// Arm the timer: run `on_tick` every `interval` until disarmed.
    ///
    /// The first tick fires one full `interval` after arming — the caller
    /// issues its own immediate query when it wants one. Tick bodies are
    /// awaited in the timer loop and missed ticks are skipped, so at most
    /// one tick's work is in flight at a time: a slow poll delays the next
    /// tick rather than stacking queries.
    pub fn arm<F, Fut>(&self, interval: Duration, on_tick: F)
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.disarm();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval yields its first tick immediately; consume it so the
            // loop below runs on the cadence, not at arm time.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => on_tick().await,
                }
            }
        });

        match self.timer.lock() {
            Ok(mut guard) => *guard = Some(cancel),
            Err(e) => {
                tracing::error!("PollScheduler timer lock poisoned during arm: {e}");
                cancel.cancel();
            }
        }
    }

    /// Disarm the timer. Idempotent; safe when nothing is armed.
    ///
    /// Cancellation is observed at the next loop iteration, so a tick body
    /// that is mid-flight (including one calling `disarm` on itself after
    /// a terminal status) runs to completion.
    pub fn disarm(&self) {
        let armed = match self.timer.lock() {
            Ok(mut guard) => guard.take(),
            Err(e) => {
                tracing::error!("PollScheduler timer lock poisoned during disarm: {e}");
                None
            }
        };
        if let Some(token) = armed {
            token.cancel();
        }
    }

    /// Whether a timer is currently armed.
    pub fn is_armed(&self) -> bool {
        match self.timer.lock() {
            Ok(guard) => guard.as_ref().is_some_and(|t| !t.is_cancelled()),
            Err(e) => {
                tracing::error!("PollScheduler timer lock poisoned during is_armed: {e}");
                false
            }
        }
    }
}

impl Default for PollScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.disarm();
    }
}
