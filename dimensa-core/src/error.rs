//! Errors returned by the runtime boundaries of the crate.
//!
//! Unit algebra is checked by the compiler and arithmetic follows IEEE-754, so the only fallible operations are
//! conversions into foreign types that cannot represent every `f64`.

use thiserror::Error;

/// Error returned when a quantity cannot be represented in a foreign type.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuantityError {
    /// `core::time::Duration` cannot be negative.
    #[error("negative duration: {0} s")]
    NegativeDuration(f64),
    /// NaN or infinite seconds.
    #[error("non-finite duration: {0} s")]
    NonFiniteDuration(f64),
    /// More seconds than `Duration` holds.
    #[error("duration overflow: {0} s exceeds the largest representable duration")]
    DurationOverflow(f64),
}

/// Convenience alias for results carrying a [`QuantityError`].
pub type Result<T> = core::result::Result<T, QuantityError>;
