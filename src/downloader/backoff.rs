//! Adaptive request throttling
//!
//! One [`Backoff`] instance accompanies a single executor pass. It escalates
//! sharply (doubling) when the remote signals it is blocking us, and relaxes
//! slowly over a run of successful requests so a pass never bursts back to
//! full speed right after being throttled.

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::downloader::config::{DECAY_FACTOR, WAIT_FLOOR};

/// Escalating/decaying delay state used between requests.
#[derive(Debug, Clone)]
pub struct Backoff {
    count: f64,
    base: Duration,
    ceiling: Duration,
}

impl Backoff {
    /// Create a throttle with the given base delay and per-sleep ceiling.
    pub fn new(base: Duration, ceiling: Duration) -> Self {
        Self {
            count: 0.0,
            base,
            ceiling,
        }
    }

    /// Current escalated delay: `min(ceiling, base * 2^count)`.
    pub fn interval(&self) -> Duration {
        let secs = self.base.as_secs_f64() * 2f64.powf(self.count);
        Duration::from_secs_f64(secs.min(self.ceiling.as_secs_f64()))
    }

    /// Sleep for the escalated delay, then raise the count by one.
    ///
    /// Applied after the remote explicitly rejected a request; each call
    /// doubles the next delay until the ceiling is reached.
    pub async fn backoff(&mut self) {
        let delay = self.interval();
        info!(delay_secs = delay.as_secs_f64(), "backing off");
        sleep(delay).await;
        self.count += 1.0;
    }

    /// Pause briefly after a successful request and relax the count.
    ///
    /// The delay is linear in the count, `max(floor, base * count)`. When it
    /// exceeds the floor the pause is slept through and the count decays by
    /// [`DECAY_FACTOR`]; at or below the floor nothing happens, so a throttle
    /// that was never escalated adds no latency to the happy path.
    pub async fn wait(&mut self) {
        let floor = WAIT_FLOOR.as_secs_f64();
        let delay = (self.base.as_secs_f64() * self.count).max(floor);
        if delay > floor {
            info!(delay_secs = delay, "waiting without backoff");
            sleep(Duration::from_secs_f64(delay)).await;
            self.count *= DECAY_FACTOR;
        }
    }

    pub(crate) fn count(&self) -> f64 {
        self.count
    }
}
