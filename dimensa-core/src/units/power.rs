//! Power units.
//!
//! The canonical unit for this dimension is [`Watt`] (`kg·m²·s⁻³`). Alongside the linear units, power is the usual
//! home of referenced decibel levels:
//!
//! - [`DecibelWatts`] (dBW) is a level referenced to one watt.
//! - [`DecibelMilliwatts`] (dBm) is a level referenced to one milliwatt.
//!
//! Both convert through the linear domain, so `dBW → dBm` adds exactly 30 dB and a level can be read back as
//! watts with [`Quantity::to_scale`].
//!
//! ```rust
//! use dimensa_core::power::{DecibelWatts, Milliwatt, Watt};
//! use dimensa_core::Linear;
//!
//! let level = DecibelWatts::new(20.0);
//! assert!((level.to::<Milliwatt>().value() - 50.0).abs() < 1e-9);
//! assert!((level.to_scale::<Watt, Linear>().value() - 100.0).abs() < 1e-9);
//! ```

use crate::{Decibel, Quantity, Unit};
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait PowerUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/power.rs"));

/// A power level in decibels relative to one watt (dBW).
pub type DecibelWatts = Quantity<Watt, f64, Decibel>;
/// A power level in decibels relative to one milliwatt (dBm).
pub type DecibelMilliwatts = Quantity<Milliwatt, f64, Decibel>;

/// One watt.
pub const WATT: Watts = Watts::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unitless::Decibels;
    use crate::Linear;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Linear units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn prefixed_watts() {
        assert_eq!(Kilowatts::new(1.5).to::<Watt>().value(), 1500.0);
        assert_abs_diff_eq!(Milliwatts::new(250.0).to::<Watt>().value(), 0.25, epsilon = 1e-15);
        let w: Watts = Megawatts::new(2.0).into();
        assert_eq!(w.value(), 2_000_000.0);
    }

    #[test]
    fn non_si_units() {
        assert_abs_diff_eq!(Horsepowers::new(1.0).to::<Watt>().value(), 745.699_871_582_270_22, epsilon = 1e-9);
        assert_abs_diff_eq!(ErgsPerSecond::new(1e7).to::<Watt>().value(), 1.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Decibel levels
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn dbw_reads_as_watts_and_dbm() {
        let level = DecibelWatts::new(23.1);
        assert_abs_diff_eq!(level.to_scale::<Watt, Linear>().value(), 204.173_794, epsilon = 1e-6);
        assert_abs_diff_eq!(level.to::<Milliwatt>().value(), 53.1, epsilon = 1e-9);
    }

    #[test]
    fn watts_into_levels() {
        let dbm: DecibelMilliwatts = Milliwatts::new(100_000.0).into();
        assert_abs_diff_eq!(dbm.value(), 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dbm.to::<Watt>().value(), 20.0, epsilon = 1e-9);
        let dbw = Watts::new(100.0).to_scale::<Watt, Decibel>();
        assert_abs_diff_eq!(dbw.value(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn gain_applies_to_a_level() {
        let boosted = Decibels::new(30.0) + DecibelWatts::new(10.0);
        assert_abs_diff_eq!(boosted.value(), 40.0, epsilon = 1e-12);
        assert_abs_diff_eq!(boosted.to_scale::<Watt, Linear>().value(), 10_000.0, epsilon = 1e-6);

        let attenuated = DecibelWatts::new(10.0) - Decibels::new(3.0);
        assert_abs_diff_eq!(attenuated.value(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn difference_of_levels_is_a_ratio() {
        let ratio: Decibels = DecibelWatts::new(10.0) - DecibelMilliwatts::new(30.0);
        assert_abs_diff_eq!(ratio.value(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn level_names() {
        assert_eq!(DecibelWatts::new(1.0).abbreviation().to_string(), "dBW");
        assert_eq!(DecibelMilliwatts::new(1.0).abbreviation().to_string(), "dBmW");
        assert_eq!(DecibelWatts::new(1.0).name().to_string(), "decibel watt");
        assert_eq!(format!("{}", DecibelWatts::new(3.0)), "3 dBW");
    }

    proptest! {
        #[test]
        fn prop_dbw_dbm_offset(v in -150.0..150.0f64) {
            let dbm = DecibelWatts::new(v).to::<Milliwatt>().value();
            prop_assert!((dbm - (v + 30.0)).abs() <= 1e-9);
        }
    }
}
