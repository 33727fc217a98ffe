// src/lib.rs

//! # Turnstile
//!
//! Per-key request admission control with two interchangeable policies: a
//! sliding-window limiter (at most N requests per key in any trailing
//! window) and an interval throttle (a minimum spacing between a key's
//! admissions). Both implement the same [`RateLimiter`] contract, decide
//! atomically per key under concurrent callers, and reclaim the state of
//! keys whose admissions have aged out.
//!
//! ## Quick Example
//!
//! ```rust
//! use turnstile::{MonotonicClock, RateLimiter, SlidingWindowConfig, SlidingWindowLimiter};
//!
//! // at most 1 request per key in any trailing 10 seconds
//! let config = SlidingWindowConfig::default();
//! let limiter = SlidingWindowLimiter::with_config(config, MonotonicClock::new()).unwrap();
//!
//! if limiter.record("user_123") {
//!     println!("Request allowed");
//! } else {
//!     let wait = limiter.time_until_next_allowed(&"user_123");
//!     println!("Rate limited - retry in {:.2}s", wait.as_secs_f64());
//! }
//! ```

// private modules
mod clock;
mod config;
mod errors;
mod limiter;
mod sliding_window;
mod throttle;

// public API exports
pub use clock::{Clock, MonotonicClock};
pub use config::{
    DEFAULT_MAX_REQUESTS, DEFAULT_MIN_INTERVAL, DEFAULT_WINDOW_SIZE, SlidingWindowConfig,
    ThrottleConfig,
};
pub use errors::TurnstileError;
pub use limiter::RateLimiter;
pub use sliding_window::SlidingWindowLimiter;
pub use throttle::IntervalThrottle;
