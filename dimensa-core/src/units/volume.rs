//! Volume units.
//!
//! The canonical unit is the [`CubicMeter`]. The [`Liter`] is declared as a cubic decimetre and carries the metric
//! prefix family (millilitre, centilitre, …). US customary units are exact multiples of the cubic inch
//! (`1 gal = 231 in³`); the imperial gallon is defined as `4.546 09 L`.
//!
//! ```rust
//! use dimensa_core::volume::{Milliliter, UsGallons};
//!
//! let ml = UsGallons::new(1.0).to::<Milliliter>();
//! assert!((ml.value() - 3785.411_784).abs() < 1e-9);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait VolumeUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/volume.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Centimeters, Meters};
    use crate::Dimension;
    use approx::assert_abs_diff_eq;

    #[test]
    fn volume_dimension() {
        assert_eq!(Liter::FACTOR.dimension(), Dimension::VOLUME);
        assert_eq!(Milliliter::FACTOR.scale(), CubicCentimeter::FACTOR.scale());
    }

    #[test]
    fn metric_volumes() {
        assert_abs_diff_eq!(CubicMeters::new(1.0).to::<Liter>().value(), 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Milliliters::new(250.0).to::<Liter>().value(), 0.25, epsilon = 1e-12);
        let cc: CubicCentimeters = Milliliters::new(5.0).to();
        assert_abs_diff_eq!(cc.value(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn customary_volumes() {
        assert_abs_diff_eq!(UsGallons::new(1.0).to::<UsQuart>().value(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(UsQuarts::new(1.0).to::<UsPint>().value(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(UsPints::new(1.0).to::<UsFluidOunce>().value(), 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(CubicFeet::new(1.0).to::<CubicInch>().value(), 1728.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ImperialGallons::new(1.0).to::<Liter>().value(), 4.546_09, epsilon = 1e-12);
    }

    #[test]
    fn products_of_lengths() {
        let v = Meters::new(1.0) * Meters::new(1.0) * Centimeters::new(10.0);
        assert_abs_diff_eq!(v.to::<Liter>().value(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn symbols() {
        assert_eq!(format!("{}", Liters::new(2.0)), "2 L");
        assert_eq!(Milliliters::new(1.0).abbreviation().to_string(), "mL");
        assert_eq!(Milliliters::new(1.0).name().to_string(), "millilitre");
    }
}
