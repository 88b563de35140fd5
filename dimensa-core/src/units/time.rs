//! Time units.
//!
//! The canonical unit for this dimension is [`Second`]. Calendar units use fixed-length days of `86 400 s`:
//!
//! - [`Year`] is the mean Gregorian year (`365.2425 d`).
//! - [`JulianYear`] (`365.25 d`) and [`JulianCentury`] are the astronomical conventions.
//!
//! Every time quantity converts to and from [`core::time::Duration`]:
//!
//! ```rust
//! use core::time::Duration;
//! use dimensa_core::time::{Milliseconds, Minutes};
//!
//! let timeout: Milliseconds = Duration::from_secs(90).into();
//! assert_eq!(timeout.value(), 90_000.0);
//!
//! let back = Duration::try_from(Minutes::new(1.5)).unwrap();
//! assert_eq!(back, Duration::from_secs(90));
//! ```

use crate::error::QuantityError;
use crate::{Quantity, Unit};
use core::time::Duration;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait TimeUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/time.rs"));

/// One second.
pub const SEC: Seconds = Seconds::new(1.0);
/// One day.
pub const DAY: Days = Days::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Duration boundary
// ─────────────────────────────────────────────────────────────────────────────

/// Builds any time-dimensioned quantity, compound units included; other dimensions fail to build.
impl<U: Unit> From<Duration> for Quantity<U> {
    #[inline]
    fn from(duration: Duration) -> Self {
        Seconds::new(duration.as_secs_f64()).to::<U>()
    }
}

impl<U: Unit> TryFrom<Quantity<U>> for Duration {
    type Error = QuantityError;

    /// Fails for negative, non-finite and out-of-range values.
    fn try_from(quantity: Quantity<U>) -> Result<Self, Self::Error> {
        let secs = quantity.to::<Second>().value();
        if !secs.is_finite() {
            log::warn!("cannot build a Duration from {secs} s");
            return Err(QuantityError::NonFiniteDuration(secs));
        }
        if secs < 0.0 {
            log::warn!("cannot build a Duration from {secs} s");
            return Err(QuantityError::NegativeDuration(secs));
        }
        Duration::try_from_secs_f64(secs).map_err(|_| {
            log::warn!("{secs} s does not fit in a Duration");
            QuantityError::DurationOverflow(secs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn calendar_units() {
        assert_eq!(Hours::new(1.0).to::<Second>().value(), 3600.0);
        assert_eq!(Days::new(1.0).to::<Hour>().value(), 24.0);
        assert_eq!(Weeks::new(2.0).to::<Fortnight>().value(), 1.0);
        assert_abs_diff_eq!(Years::new(1.0).to::<Day>().value(), 365.2425, epsilon = 1e-9);
        assert_abs_diff_eq!(JulianYears::new(1.0).to::<Day>().value(), 365.25, epsilon = 1e-9);
        assert_abs_diff_eq!(JulianCenturies::new(1.0).to::<JulianYear>().value(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn prefixed_seconds() {
        assert_eq!(Milliseconds::new(1500.0).to::<Second>().value(), 1.5);
        assert_abs_diff_eq!(Seconds::new(1.0).to::<Nanosecond>().value(), 1e9, epsilon = 1e-3);
        let s: Seconds = Kiloseconds::new(3.6).into();
        assert_abs_diff_eq!(s.value(), 3600.0, epsilon = 1e-9);
        assert_eq!(Microseconds::new(1.0).abbreviation().to_string(), "µs");
    }

    #[test]
    fn names() {
        assert_eq!(Hours::new(1.0).name().to_string(), "hour");
        assert_eq!(Milliseconds::new(1.0).name().to_string(), "millisecond");
        assert_eq!(format!("{}", Minutes::new(2.0)), "2 min");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Duration boundary
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_duration() {
        let q: Seconds = Duration::from_millis(2500).into();
        assert_eq!(q.value(), 2.5);
        let h: Hours = Duration::from_secs(5400).into();
        assert_eq!(h.value(), 1.5);
        let ms: Quantity<Millisecond> = Duration::from_nanos(1_500_000).into();
        assert_abs_diff_eq!(ms.value(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn into_duration() {
        assert_eq!(Duration::try_from(Seconds::new(2.5)), Ok(Duration::from_millis(2500)));
        assert_eq!(Duration::try_from(Days::new(1.0)), Ok(Duration::from_secs(86_400)));
        assert_eq!(Duration::try_from(Seconds::new(0.0)), Ok(Duration::ZERO));
    }

    #[test]
    fn into_duration_rejects_invalid_values() {
        assert_eq!(
            Duration::try_from(Seconds::new(-1.0)),
            Err(QuantityError::NegativeDuration(-1.0))
        );
        assert!(matches!(
            Duration::try_from(Seconds::NAN),
            Err(QuantityError::NonFiniteDuration(_))
        ));
        assert_eq!(
            Duration::try_from(Hours::new(f64::INFINITY)),
            Err(QuantityError::NonFiniteDuration(f64::INFINITY))
        );
        assert!(matches!(
            Duration::try_from(JulianYears::new(1e15)),
            Err(QuantityError::DurationOverflow(_))
        ));
    }

    #[test]
    fn error_messages() {
        let err = Duration::try_from(Seconds::new(-2.0)).unwrap_err();
        assert_eq!(err.to_string(), "negative duration: -2 s");
    }

    proptest! {
        #[test]
        fn prop_duration_roundtrip(ms in 0u64..1_000_000_000u64) {
            let d = Duration::from_millis(ms);
            let q: Seconds = d.into();
            let back = Duration::try_from(q).unwrap();
            let diff = if back > d { back - d } else { d - back };
            prop_assert!(diff <= Duration::from_nanos(1));
        }
    }
}
