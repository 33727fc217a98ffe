// src/clock.rs

// clock abstraction and the default monotonic implementation

// dependencies
use std::time::Instant;

/// Clock trait to abstract time retrieval.
/// Implementors must be thread-safe (Send + Sync).
/// The `now` method returns the current time in nanoseconds as a u64,
/// measured on the clock's own timeline; successive calls never decrease.
/// This trait allows for different clock implementations, such as the
/// monotonic system clock or a settable test clock.
/// The Clock trait is used by both limiters to get the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// MonotonicClock implementation over `std::time::Instant`.
/// Returns the time elapsed since the clock was created, in nanoseconds.
/// Immune to wall-clock adjustments, so admission decisions never move
/// backward in time.
/// This is the default clock used by both limiters.
/// Implements the Clock trait.
/// Thread-safe and can be shared across threads.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose timeline starts now, at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        // saturates rather than wraps once elapsed exceeds u64's
        // nanosecond range
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

// Make MonotonicClock the default
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
