//! Pressure units.
//!
//! The canonical unit is the [`Pascal`] (`N/m²`). The standard atmosphere is exactly `101 325 Pa`, the torr is
//! `1/760 atm` and the psi is one pound-force per square inch.
//!
//! ```rust
//! use dimensa_core::pressure::{Atmospheres, Hectopascal};
//!
//! let hpa = Atmospheres::new(1.0).to::<Hectopascal>();
//! assert!((hpa.value() - 1013.25).abs() < 1e-9);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait PressureUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/pressure.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{SquareInches, SquareMeters};
    use crate::force::{Newtons, PoundsForce};
    use crate::Dimension;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pascal_is_force_over_area() {
        assert_eq!(Pascal::FACTOR.dimension(), Dimension::PRESSURE);
        let p = Newtons::new(500.0) / SquareMeters::new(2.0);
        assert_abs_diff_eq!(p.to::<Pascal>().value(), 250.0, epsilon = 1e-12);
    }

    #[test]
    fn psi_is_pound_force_per_square_inch() {
        let p = PoundsForce::new(1.0) / SquareInches::new(1.0);
        assert_abs_diff_eq!(p.to::<PoundPerSquareInch>().value(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(PoundsPerSquareInch::new(1.0).to::<Pascal>().value(), 6894.757_293_168, epsilon = 1e-6);
    }

    #[test]
    fn atmospheric_units() {
        assert_abs_diff_eq!(Atmospheres::new(1.0).to::<Torr>().value(), 760.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Bars::new(1.0).to::<Millibar>().value(), 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Atmospheres::new(1.0).to::<Bar>().value(), 1.013_25, epsilon = 1e-12);
        let kpa: Kilopascals = Bars::new(1.0).to();
        assert_abs_diff_eq!(kpa.value(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn symbols() {
        assert_eq!(format!("{}", Hectopascals::new(1013.0)), "1013 hPa");
        assert_eq!(Atmospheres::new(1.0).name().to_string(), "standard atmosphere");
    }
}
