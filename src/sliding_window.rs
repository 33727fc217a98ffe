// src/sliding_window.rs

// sliding-window limiter: at most N admissions per key in any trailing window

// dependencies
use crate::clock::{Clock, MonotonicClock};
use crate::config::SlidingWindowConfig;
use crate::errors::TurnstileError;
use crate::limiter::RateLimiter;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::hash::Hash;
use std::time::Duration;
use tracing::{debug, trace};

/// Sliding-window limiter over a per-key log of admission timestamps.
/// K is the type used to identify callers (e.g., String, u64, etc.).
/// C is the clock type, defaulting to MonotonicClock.
/// Admits at most `max_requests` per key within any trailing `window_size`.
/// Each key's log holds the admissions still inside the window, oldest
/// first; a key with no in-window admissions holds no state at all.
#[derive(Debug)]
pub struct SlidingWindowLimiter<K, C = MonotonicClock>
where
    K: Hash + Eq,
    C: Clock,
{
    window_nanos: u64,
    max_requests: usize,
    history: DashMap<K, VecDeque<u64>>,
    clock: C,
}

// methods for the SlidingWindowLimiter type
impl<K, C> SlidingWindowLimiter<K, C>
where
    K: Hash + Eq,
    C: Clock,
{
    // method to create a new limiter from a config object
    pub fn with_config(config: SlidingWindowConfig, clock: C) -> Result<Self, TurnstileError> {
        config.validate()?;
        Ok(Self {
            // saturate rather than wrap: a window past u64's nanosecond
            // range behaves as unbounded, never as a tiny one
            window_nanos: u64::try_from(config.window_size.as_nanos()).unwrap_or(u64::MAX),
            max_requests: config.max_requests,
            history: DashMap::new(),
            clock,
        })
    }

    // accessor method to return the configured window size
    pub fn window_size(&self) -> Duration {
        Duration::from_nanos(self.window_nanos)
    }

    // accessor method to return the configured per-window capacity
    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Number of keys currently holding admission state.
    pub fn tracked_keys(&self) -> usize {
        self.history.len()
    }

    /// Drop every key whose admissions have all aged out of the window.
    /// The per-operation paths already evict lazily on the key they touch;
    /// this sweep reclaims keys that are never queried again.
    pub fn purge_stale(&self) {
        let now = self.clock.now();
        let Some(cutoff) = now.checked_sub(self.window_nanos) else {
            // the clock is younger than one window; nothing is stale yet
            return;
        };
        self.history
            .retain(|_, log| log.back().is_some_and(|&newest| newest > cutoff));
        debug!(remaining = self.history.len(), "stale key sweep complete");
    }

    // pop expired timestamps from the front of a key's log; the log is
    // sorted oldest-first, so eviction stops at the first live entry.
    // the window is half-open: a timestamp exactly `window` old is expired
    fn evict_expired(&self, log: &mut VecDeque<u64>, now: u64) {
        let Some(cutoff) = now.checked_sub(self.window_nanos) else {
            return;
        };
        while log.front().is_some_and(|&ts| ts <= cutoff) {
            log.pop_front();
        }
    }

    // remove the key's entry once its log has emptied; the predicate
    // re-checks emptiness under the shard lock, so an admission recorded
    // by a concurrent caller is never discarded
    fn drop_if_empty(&self, key: &K) {
        self.history.remove_if(key, |_, log| log.is_empty());
    }
}

impl<K, C> RateLimiter<K> for SlidingWindowLimiter<K, C>
where
    K: Hash + Eq + Send + Sync,
    C: Clock,
{
    fn can_send(&self, key: &K) -> bool {
        if self.max_requests == 0 {
            return false;
        }
        let Some(mut log) = self.history.get_mut(key) else {
            return true;
        };
        let now = self.clock.now();
        self.evict_expired(&mut log, now);
        let open = log.len() < self.max_requests;
        let emptied = log.is_empty();
        drop(log);
        if emptied {
            self.drop_if_empty(key);
        }
        open
    }

    fn record(&self, key: K) -> bool {
        if self.max_requests == 0 {
            return false;
        }
        // the entry guard spans the clock read, eviction, check, and
        // append: the decision is atomic per key, and timestamps enter
        // the log in lock-acquisition order, which keeps it sorted
        let mut log = self.history.entry(key).or_default();
        let now = self.clock.now();
        self.evict_expired(&mut log, now);
        if log.len() < self.max_requests {
            log.push_back(now);
            true
        } else {
            trace!(in_window = log.len(), "admission denied; window at capacity");
            false
        }
    }

    fn time_until_next_allowed(&self, key: &K) -> Duration {
        if self.max_requests == 0 {
            // no admission can ever succeed, so no finite wait exists
            return Duration::MAX;
        }
        let Some(mut log) = self.history.get_mut(key) else {
            return Duration::ZERO;
        };
        let now = self.clock.now();
        self.evict_expired(&mut log, now);
        let wait = match log.front() {
            // the oldest in-window admission reopens a slot when it ages out
            Some(&oldest) if log.len() >= self.max_requests => {
                Duration::from_nanos(oldest.saturating_add(self.window_nanos).saturating_sub(now))
            }
            _ => Duration::ZERO,
        };
        let emptied = log.is_empty();
        drop(log);
        if emptied {
            self.drop_if_empty(key);
        }
        wait
    }
}
