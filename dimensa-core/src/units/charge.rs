//! Electric charge units.
//!
//! The canonical unit is the [`Coulomb`] (`A·s`). Battery capacities are usually quoted in
//! [`AmpereHour`]s and [`MilliampereHour`]s.
//!
//! ```rust
//! use dimensa_core::charge::{Coulomb, MilliampereHours};
//!
//! let c = MilliampereHours::new(1000.0).to::<Coulomb>();
//! assert!((c.value() - 3600.0).abs() < 1e-9);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait ChargeUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/charge.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::current::{Amperes, Milliamperes};
    use crate::time::{Hours, Seconds};
    use crate::Dimension;
    use approx::assert_abs_diff_eq;

    #[test]
    fn coulomb_is_ampere_second() {
        assert_eq!(Coulomb::FACTOR.dimension(), Dimension::CHARGE);
        let q = Amperes::new(2.0) * Seconds::new(3.0);
        assert_abs_diff_eq!(q.to::<Coulomb>().value(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn battery_capacity() {
        let q = Milliamperes::new(500.0) * Hours::new(4.0);
        assert_abs_diff_eq!(q.to::<MilliampereHour>().value(), 2000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(AmpereHours::new(1.0).to::<MilliampereHour>().value(), 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Microcoulombs::new(1e6).to::<Coulomb>().value(), 1.0, epsilon = 1e-12);
    }
}
