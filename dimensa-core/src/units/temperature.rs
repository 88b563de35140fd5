//! Thermodynamic temperature units.
//!
//! The canonical unit is the [`Kelvin`]. Celsius, Fahrenheit and Réaumur are *affine*: besides a scale they carry an
//! offset, expressed in kelvin, which the conversion applies as `x · m + b` in one step.
//!
//! | unit                | scale  | offset (K)  |
//! |---------------------|--------|-------------|
//! | [`Kelvin`]          | 1      | 0           |
//! | [`Celsius`]         | 1      | 273.15      |
//! | [`Fahrenheit`]      | 5/9    | 255.372̅     |
//! | [`Rankine`]         | 5/9    | 0           |
//! | [`Reaumur`]         | 5/4    | 273.15      |
//!
//! Offsets only mean something for absolute readings. Multiplying or dividing by a temperature keeps the scale
//! but drops the offset, so `J/°C` and `J/K` are the same unit:
//!
//! ```rust
//! use dimensa_core::temperature::{DegreesCelsius, DegreesFahrenheit, Kelvin};
//!
//! let body = DegreesFahrenheit::new(98.6);
//! let c = body.to::<dimensa_core::temperature::Celsius>();
//! assert!((c.value() - 37.0).abs() < 1e-9);
//!
//! let boiling = DegreesCelsius::new(100.0).to::<Kelvin>();
//! assert!((boiling.value() - 373.15).abs() < 1e-9);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait TemperatureUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/temperature.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::Joule;
    use crate::{Per, Quantity};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Reference readings
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kelvin_to_others() {
        assert_abs_diff_eq!(Kelvins::new(300.0).to::<Fahrenheit>().value(), 80.33, epsilon = 1e-9);
        assert_abs_diff_eq!(Kelvins::new(300.0).to::<Celsius>().value(), 26.85, epsilon = 1e-9);
        assert_abs_diff_eq!(Kelvins::new(100.0).to::<Rankine>().value(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn others_to_kelvin() {
        assert_abs_diff_eq!(DegreesFahrenheit::new(451.0).to::<Kelvin>().value(), 505.927_777_8, epsilon = 1e-6);
        assert_abs_diff_eq!(DegreesCelsius::new(451.0).to::<Kelvin>().value(), 724.15, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesRankine::new(100.0).to::<Kelvin>().value(), 55.555_555_6, epsilon = 1e-6);
        assert_abs_diff_eq!(DegreesReaumur::new(100.0).to::<Kelvin>().value(), 398.15, epsilon = 1e-9);
    }

    #[test]
    fn between_affine_scales() {
        assert_abs_diff_eq!(DegreesFahrenheit::new(72.0).to::<Celsius>().value(), 22.222_222_2, epsilon = 1e-6);
        assert_abs_diff_eq!(DegreesCelsius::new(100.0).to::<Fahrenheit>().value(), 212.0, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesFahrenheit::new(32.0).to::<Celsius>().value(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesFahrenheit::new(100.0).to::<Rankine>().value(), 559.67, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesRankine::new(72.0).to::<Fahrenheit>().value(), -387.67, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesReaumur::new(80.0).to::<Celsius>().value(), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesCelsius::new(212.0).to::<Reaumur>().value(), 169.6, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesReaumur::new(80.0).to::<Fahrenheit>().value(), 212.0, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesFahrenheit::new(37.0).to::<Reaumur>().value(), 2.222_222_2, epsilon = 1e-6);
    }

    #[test]
    fn pairwise_from() {
        let k: Kelvins = DegreesCelsius::new(-273.15).into();
        assert_abs_diff_eq!(k.value(), 0.0, epsilon = 1e-9);
        let f: DegreesFahrenheit = DegreesCelsius::new(-40.0).into();
        assert_abs_diff_eq!(f.value(), -40.0, epsilon = 1e-9);
    }

    #[test]
    fn names_and_symbols() {
        assert_eq!(format!("{}", DegreesCelsius::new(21.5)), "21.5 °C");
        assert_eq!(DegreesReaumur::new(1.0).name().to_string(), "degree Réaumur");
        assert_eq!(Millikelvins::new(1.0).abbreviation().to_string(), "mK");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Offsets in compound units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn compound_units_use_the_scale_only() {
        let per_celsius = Quantity::<Per<Joule, Celsius>>::new(10.0);
        assert_abs_diff_eq!(per_celsius.to::<Per<Joule, Kelvin>>().value(), 10.0, epsilon = 1e-12);
        let per_fahrenheit = per_celsius.to::<Per<Joule, Fahrenheit>>();
        assert_abs_diff_eq!(per_fahrenheit.value(), 50.0 / 9.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_celsius_fahrenheit_formula(c in -1e4..1e4f64) {
            let f = DegreesCelsius::new(c).to::<Fahrenheit>().value();
            prop_assert!((f - (c * 9.0 / 5.0 + 32.0)).abs() <= 1e-9 * c.abs().max(1.0));
        }
    }
}
