// src/limiter.rs

// the admission contract shared by both limiter policies

// dependencies
use std::time::Duration;

/// Per-key admission contract implemented by every limiter policy.
/// Object-safe, so callers can hold a `Box<dyn RateLimiter<K>>` and swap
/// the policy without touching call sites.
pub trait RateLimiter<K>: Send + Sync {
    /// Would a request from this key be admitted right now?
    /// A pure query: it never alters the admission outcome of any later
    /// call, and never creates state for unknown keys.
    fn can_send(&self, key: &K) -> bool;

    /// Admit a request from this key if its quota allows, recording the
    /// admission. Returns whether the request was admitted. The check and
    /// the state update happen as one atomic step per key.
    fn record(&self, key: K) -> bool;

    /// Time remaining until this key's next request would be admitted.
    /// Zero exactly when the key is currently eligible, including keys
    /// never recorded.
    fn time_until_next_allowed(&self, key: &K) -> Duration;
}
