//! Fixed-period clock for driving `TimerEngine::tick`.
//!
//! The ticker owns a tokio task; dropping the [`Ticker`] aborts it, so the
//! clock stops on every exit path of the host loop.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

pub struct Ticker {
    handle: JoinHandle<()>,
    period: Duration,
}

impl Ticker {
    /// Start a clock that sends one `Instant` per `period`, the first one
    /// a full period from now.
    ///
    /// Must be called inside a tokio runtime.
    pub fn spawn(period: Duration) -> (Self, mpsc::Receiver<Instant>) {
        let (tx, rx) = mpsc::channel(8);
        let first = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                let at = interval.tick().await;
                trace!("tick");
                if tx.send(at).await.is_err() {
                    break;
                }
            }
        });
        (Self { handle, period }, rx)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop the clock. Equivalent to dropping the ticker.
    pub fn cancel(self) {}
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
