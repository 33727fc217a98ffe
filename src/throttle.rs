// src/throttle.rs

// interval throttle: a fixed minimum spacing between admissions per key

// dependencies
use crate::clock::{Clock, MonotonicClock};
use crate::config::ThrottleConfig;
use crate::errors::TurnstileError;
use crate::limiter::RateLimiter;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::hash::Hash;
use std::time::Duration;
use tracing::{debug, trace};

/// Interval throttle over a per-key last-admission timestamp.
/// K is the type used to identify callers (e.g., String, u64, etc.).
/// C is the clock type, defaulting to MonotonicClock.
/// Admits a key's request only when at least `min_interval` has elapsed
/// since that key's previous admission. Behaves like a sliding-window
/// limiter with capacity one, but keeps a single timestamp per key
/// instead of a log.
#[derive(Debug)]
pub struct IntervalThrottle<K, C = MonotonicClock>
where
    K: Hash + Eq,
    C: Clock,
{
    interval_nanos: u64,
    last_seen: DashMap<K, u64>,
    clock: C,
}

// methods for the IntervalThrottle type
impl<K, C> IntervalThrottle<K, C>
where
    K: Hash + Eq,
    C: Clock,
{
    // method to create a new throttle from a config object
    pub fn with_config(config: ThrottleConfig, clock: C) -> Result<Self, TurnstileError> {
        config.validate()?;
        Ok(Self {
            // saturate rather than wrap: an interval past u64's nanosecond
            // range behaves as unbounded, never as a tiny one
            interval_nanos: u64::try_from(config.min_interval.as_nanos()).unwrap_or(u64::MAX),
            last_seen: DashMap::new(),
            clock,
        })
    }

    // accessor method to return the configured minimum interval
    pub fn min_interval(&self) -> Duration {
        Duration::from_nanos(self.interval_nanos)
    }

    /// Number of keys currently holding admission state.
    pub fn tracked_keys(&self) -> usize {
        self.last_seen.len()
    }

    /// Drop keys whose last admission is at least one interval old.
    /// Such keys are already eligible again, so dropping their state
    /// changes no future decision.
    pub fn purge_stale(&self) {
        let now = self.clock.now();
        self.last_seen
            .retain(|_, &mut last| now.saturating_sub(last) < self.interval_nanos);
        debug!(remaining = self.last_seen.len(), "stale key sweep complete");
    }
}

impl<K, C> RateLimiter<K> for IntervalThrottle<K, C>
where
    K: Hash + Eq + Send + Sync,
    C: Clock,
{
    fn can_send(&self, key: &K) -> bool {
        match self.last_seen.get(key) {
            Some(last) => {
                let now = self.clock.now();
                now.saturating_sub(*last) >= self.interval_nanos
            }
            None => true,
        }
    }

    fn record(&self, key: K) -> bool {
        // the entry guard spans the clock read and the check-and-set: the
        // decision is atomic per key, and the stored timestamp is the time
        // the admission actually landed
        let entry = self.last_seen.entry(key);
        let now = self.clock.now();
        match entry {
            Entry::Vacant(slot) => {
                slot.insert(now);
                true
            }
            Entry::Occupied(mut slot) => {
                if now.saturating_sub(*slot.get()) >= self.interval_nanos {
                    slot.insert(now);
                    true
                } else {
                    trace!("admission denied; minimum interval not yet elapsed");
                    false
                }
            }
        }
    }

    fn time_until_next_allowed(&self, key: &K) -> Duration {
        match self.last_seen.get(key) {
            Some(last) => {
                let now = self.clock.now();
                let elapsed = now.saturating_sub(*last);
                Duration::from_nanos(self.interval_nanos.saturating_sub(elapsed))
            }
            None => Duration::ZERO,
        }
    }
}
