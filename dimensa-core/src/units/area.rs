//! Area units.
//!
//! The canonical unit is the [`SquareMeter`]. Every unit here is declared as the square of a length unit (with
//! an extra ratio for the are, hectare and acre), so a product of two lengths converts straight into any of them.
//!
//! ```rust
//! use dimensa_core::area::Hectare;
//! use dimensa_core::length::Meters;
//!
//! let field = Meters::new(200.0) * Meters::new(50.0);
//! assert!((field.to::<Hectare>().value() - 1.0).abs() < 1e-12);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait AreaUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/area.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Feet, Inch, Kilometers, Meter, Meters};
    use crate::{Dimension, Pow};
    use approx::assert_abs_diff_eq;

    #[test]
    fn area_dimension() {
        assert_eq!(SquareMeter::FACTOR.dimension(), Dimension::AREA);
        assert!(SquareMeter::FACTOR.equals(&<Pow<Meter, 2> as Unit>::FACTOR));
    }

    #[test]
    fn metric_areas() {
        assert_abs_diff_eq!(SquareKilometers::new(1.0).to::<Hectare>().value(), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Hectares::new(1.0).to::<Are>().value(), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(SquareCentimeters::new(1.0).to::<SquareMillimeter>().value(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn imperial_areas() {
        assert_abs_diff_eq!(SquareFeet::new(1.0).to::<SquareInch>().value(), 144.0, epsilon = 1e-9);
        assert_abs_diff_eq!(SquareMiles::new(1.0).to::<Acre>().value(), 640.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Acres::new(1.0).to::<SquareMeter>().value(), 4046.856_422_4, epsilon = 1e-6);
    }

    #[test]
    fn products_of_lengths() {
        let a = Kilometers::new(2.0) * Meters::new(500.0);
        assert_abs_diff_eq!(a.to::<SquareKilometer>().value(), 1.0, epsilon = 1e-12);
        let b = Feet::new(3.0) * Feet::new(4.0);
        let sq: SquareFeet = b.to();
        assert_abs_diff_eq!(sq.value(), 12.0, epsilon = 1e-12);
        let c: crate::Quantity<Pow<Inch, 2>> = sq.to();
        assert_abs_diff_eq!(c.value(), 1728.0, epsilon = 1e-9);
    }

    #[test]
    fn symbols() {
        assert_eq!(format!("{}", SquareMeters::new(4.0)), "4 m²");
        assert_eq!(Hectares::new(1.0).name().to_string(), "hectare");
    }
}
