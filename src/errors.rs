// src/errors.rs

// error handling for limiter configuration

// dependencies
use thiserror::Error;

/// Error type for limiter configuration issues.
/// Construction is the only fallible surface; admission decisions are
/// plain booleans and never error.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TurnstileError {
    #[error("Window size must be positive")]
    InvalidWindow, // for window_size == 0
    #[error("Minimum interval must be positive")]
    InvalidInterval, // for min_interval == 0
}
