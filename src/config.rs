// src/config.rs

//! Configuration types for the turnstile limiters

// dependencies
use std::time::Duration;

use crate::errors::TurnstileError;

/// Default trailing window size: 10 seconds.
pub const DEFAULT_WINDOW_SIZE: Duration = Duration::from_secs(10);

/// Default per-window request capacity: a single request.
pub const DEFAULT_MAX_REQUESTS: usize = 1;

/// Default minimum spacing between admissions: 10 seconds.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(10);

/// Configuration for sliding-window limiter behavior
#[derive(Debug, Clone)]
pub struct SlidingWindowConfig {
    pub(crate) window_size: Duration,
    pub(crate) max_requests: usize,
}

impl SlidingWindowConfig {
    /// Create a new configuration with window and capacity settings
    pub fn new(window_size: Duration, max_requests: usize) -> Self {
        Self {
            window_size,
            max_requests,
        }
    }

    /// Builder-style: set the trailing window size
    pub fn window_size(mut self, window_size: Duration) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder-style: set the per-window request capacity.
    /// A capacity of zero is valid and denies every request permanently.
    pub fn max_requests(mut self, max_requests: usize) -> Self {
        self.max_requests = max_requests;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TurnstileError> {
        if self.window_size.is_zero() {
            return Err(TurnstileError::InvalidWindow);
        }
        Ok(())
    }
}

impl Default for SlidingWindowConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_requests: DEFAULT_MAX_REQUESTS,
        }
    }
}

/// Configuration for interval throttle behavior
#[derive(Debug, Clone)]
pub struct ThrottleConfig {
    pub(crate) min_interval: Duration,
}

impl ThrottleConfig {
    /// Create a new configuration with the minimum admission interval
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    /// Builder-style: set the minimum interval between admissions
    pub fn min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TurnstileError> {
        if self.min_interval.is_zero() {
            return Err(TurnstileError::InvalidInterval);
        }
        Ok(())
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_interval: DEFAULT_MIN_INTERVAL,
        }
    }
}
