//! Velocity units (`Length / Time`).
//!
//! Any `Per<L, T>` of a length unit and a time unit is a velocity; the [`Velocity`] alias names that shape. A few
//! named units are declared on top of it: the [`Knot`] (nautical mile per hour), the [`MilePerHour`] and the
//! [`SpeedOfLight`] as a unit of its own.
//!
//! ```rust
//! use dimensa_core::length::{Kilometer, Kilometers};
//! use dimensa_core::time::{Second, Seconds};
//! use dimensa_core::velocity::Velocity;
//!
//! let d = Kilometers::new(42.0);
//! let t = Seconds::new(2.0);
//! let v: Velocity<Kilometer, Second> = d / t;
//! assert!((v.value() - 21.0).abs() < 1e-12);
//! ```

use crate::length::{Kilometer, Meter};
use crate::time::{Hour, Second};
use crate::{Per, Quantity, Unit};
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait VelocityUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/velocity.rs"));

/// A velocity quantity parameterized by length and time units.
pub type Velocity<L, T> = Quantity<Per<L, T>>;

/// Metres per second, the coherent SI velocity.
pub type MetersPerSecond = Velocity<Meter, Second>;
/// Kilometres per hour.
pub type KilometersPerHour = Velocity<Kilometer, Hour>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{AstronomicalUnit, Meters, Mile};
    use crate::time::{Day, Hours, Seconds};
    use crate::Dimension;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn velocity_dimension() {
        assert_eq!(Knot::FACTOR.dimension(), Dimension::VELOCITY);
        assert_eq!(<Per<Meter, Second> as Unit>::FACTOR.dimension(), Dimension::VELOCITY);
    }

    #[test]
    fn named_units() {
        assert_abs_diff_eq!(Knots::new(1.0).to::<Per<Meter, Hour>>().value(), 1852.0, epsilon = 1e-9);
        assert_abs_diff_eq!(MilesPerHour::new(60.0).to::<Per<Mile, Hour>>().value(), 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(MilesPerHour::new(1.0).to::<Per<Meter, Second>>().value(), 0.447_04, epsilon = 1e-12);
        assert_eq!(LightSpeeds::new(1.0).to::<Per<Meter, Second>>().value(), 299_792_458.0);
    }

    #[test]
    fn si_aliases() {
        let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(10.0);
        let kmh: KilometersPerHour = v.to();
        assert_abs_diff_eq!(kmh.value(), 36.0, epsilon = 1e-12);
        let back: MetersPerSecond = KilometersPerHour::new(36.0).to();
        assert_abs_diff_eq!(back.value(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn astronomical_rates() {
        let v: Velocity<AstronomicalUnit, Day> = Velocity::new(1.0);
        let kms = v.to::<Per<Kilometer, Second>>();
        assert_relative_eq!(kms.value(), 149_597_870.7 / 86_400.0, max_relative = 1e-12);
    }

    #[test]
    fn velocity_times_time() {
        let v: KilometersPerHour = Velocity::new(90.0);
        let d = (v * Hours::new(2.0)).to::<Kilometer>();
        assert_abs_diff_eq!(d.value(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn symbols() {
        assert_eq!(format!("{}", Knots::new(12.0)), "12 kn");
        assert_eq!(MilesPerHour::new(1.0).name().to_string(), "mile per hour");
    }

    proptest! {
        #[test]
        fn prop_kmh_mps_roundtrip(v in -1e6..1e6f64) {
            let back: KilometersPerHour = KilometersPerHour::new(v).to::<Per<Meter, Second>>().to();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
