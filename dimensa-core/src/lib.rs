//! Compile-time dimensional analysis engine.
//!
//! `dimensa-core` provides an exact, zero-cost units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`]; its [`ConversionFactor`] states how many
//!   canonical base units one of it is worth (an exact [`Rational`], a power of π and an affine offset) and its
//!   [`Dimension`] (rational exponents over eight base quantities).
//! - A value tagged with a unit is a [`Quantity<U, T, S>`], backed by `f64` or `f32` and combined under a
//!   [`Scale`] law ([`Linear`] or [`Decibel`]).
//! - Conversion is an explicit, type-checked multiply-add via [`Quantity::to`]; the factor is folded at compile
//!   time and a dimension mismatch fails the build.
//! - Derived units are the compound types [`Prod`], [`Per`], [`Inv`], [`Pow`] and [`Root`], so
//!   `length / time` is a velocity without any registration.
//!
//! Most users should depend on `dimensa` (the facade crate) unless they need direct access to these primitives.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use dimensa_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose derived units with `*` and `/`:
//!
//! ```rust
//! use dimensa_core::length::{Kilometer, Meters};
//! use dimensa_core::time::{Hour, Seconds};
//! use dimensa_core::Per;
//!
//! let v = Meters::new(100.0) / Seconds::new(20.0);
//! let kmh = v.to::<Per<Kilometer, Hour>>();
//! assert!((kmh.value() - 18.0).abs() < 1e-12);
//! ```
//!
//! Offsets and logarithmic scales go through the same conversion:
//!
//! ```rust
//! use dimensa_core::power::{DecibelWatts, Milliwatt};
//! use dimensa_core::temperature::{DegreesCelsius, Fahrenheit};
//!
//! let f = DegreesCelsius::new(100.0).to::<Fahrenheit>();
//! assert!((f.value() - 212.0).abs() < 1e-9);
//!
//! let dbm = DecibelWatts::new(20.0).to::<Milliwatt>();
//! assert!((dbm.value() - 50.0).abs() < 1e-9);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimensa-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimensa-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw value, or `{value, unit}` through
//!   [`serde_with_unit`] when `std` is enabled too.
//!
//! # Panics and errors
//!
//! Unit algebra runs in `const` contexts: rational overflow, an even root of a negative scale and a dimension
//! mismatch are build errors, never runtime panics. Arithmetic on values follows IEEE-754 (NaN and infinities
//! propagate). The only fallible runtime boundary is the conversion into [`core::time::Duration`], which returns
//! [`QuantityError`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod compound;
mod dimension;
mod error;
mod factor;
mod literal;
mod quantity;
mod ratio;
mod scalar;
mod scale;
mod unit;

pub mod math;
pub mod predicates;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use compound::{Inv, Per, Pow, Prod, Root};
pub use dimension::{BaseDimension, Dimension, BASE_DIMENSIONS};
pub use error::{QuantityError, Result};
pub use factor::{convert, Conversion, ConversionFactor};
pub use literal::{quantity, unit_cast};
pub use quantity::{Abbreviation, Quantity, UnitName};
pub use ratio::{Rational, ROOT_MAX_ITERATIONS, ROOT_TOLERANCE};
pub use scalar::Scalar;
pub use scale::{Decibel, Linear, LinearScale, LogarithmicScale, Scale, ScaleKind};
pub use unit::{Name, ReferenceUnit, Simplify, Symbol, Unit, Unitless};

#[cfg(all(feature = "serde", feature = "std"))]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are generated inside `dimensa-core` from `units.toml` so they can implement formatting and helper
/// traits without running into Rust's orphan rules.
pub mod units;

pub use units::acceleration;
pub use units::angle;
pub use units::area;
pub use units::charge;
pub use units::concentration;
pub use units::current;
pub use units::data;
pub use units::energy;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::luminous_intensity;
pub use units::mass;
pub use units::power;
pub use units::pressure;
pub use units::solid_angle;
pub use units::substance;
pub use units::temperature;
pub use units::time;
pub use units::unitless;
pub use units::velocity;
pub use units::voltage;
pub use units::volume;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Factor algebra through the compound types
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_is_associative_and_commutative() {
        use length::Foot;
        use mass::Pound;
        use time::Minute;

        let left = <Prod<Prod<Foot, Pound>, Minute> as Unit>::FACTOR;
        let right = <Prod<Foot, Prod<Pound, Minute>> as Unit>::FACTOR;
        assert!(left.equals(&right));

        let ab = <Prod<Foot, Pound> as Unit>::FACTOR;
        let ba = <Prod<Pound, Foot> as Unit>::FACTOR;
        assert!(ab.equals(&ba));
    }

    #[test]
    fn unit_times_inverse_is_identity() {
        use length::Mile;
        let f = <Prod<Mile, Inv<Mile>> as Unit>::FACTOR;
        assert!(f.dimension().is_dimensionless());
        assert_eq!(f.scale(), Rational::ONE);
        assert!(f.pi_exponent().is_zero());
    }

    #[test]
    fn root_of_power_is_identity() {
        use angle::Degree;
        use length::Inch;

        assert!(<Root<Pow<Inch, 2>, 2> as Unit>::FACTOR.equals(&Inch::FACTOR));
        assert!(<Root<Pow<Inch, 3>, 3> as Unit>::FACTOR.equals(&Inch::FACTOR));
        // π exponents halve and double exactly.
        assert!(<Root<Pow<Degree, 2>, 2> as Unit>::FACTOR.equals(&Degree::FACTOR));
    }

    #[test]
    fn compound_factors_drop_offsets() {
        use temperature::Celsius;
        let f = <Prod<Celsius, length::Meter> as Unit>::FACTOR;
        assert!(f.offset().is_zero());
        assert_eq!(f.dimension(), Dimension::TEMPERATURE.mul(Dimension::LENGTH));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions across modules
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn derived_units_meet_the_table() {
        use area::SquareMeter;
        use volume::Liter;

        let a = length::Meters::new(20.0) * length::Meters::new(5.0);
        assert_abs_diff_eq!(a.to::<SquareMeter>().value(), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.to::<area::Are>().value(), 1.0, epsilon = 1e-12);

        let box_volume = a * length::Centimeters::new(10.0);
        assert_abs_diff_eq!(box_volume.to::<Liter>().value(), 10_000.0, epsilon = 1e-9);

        let rate = energy::Joules::new(3600.0) / time::Hours::new(1.0);
        assert_abs_diff_eq!(rate.to::<power::Watt>().value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn free_functions_match_quantity_methods() {
        let from = length::Foot::FACTOR;
        let to = length::Meter::FACTOR;
        assert_abs_diff_eq!(convert(10.0, &from, &to), 3.048, epsilon = 1e-12);
        assert_eq!(
            convert(10.0, &from, &to),
            length::Feet::new(10.0).to::<length::Meter>().value()
        );
    }

    #[test]
    fn macro_predicates() {
        assert!(crate::is_same_dimension!(length::Meter, length::Foot, length::Parsec));
        assert!(!crate::is_same_dimension!(length::Meter, time::Second));
        assert!(crate::has_same_scale!(Linear, Linear));
        assert!(!crate::has_same_scale!(Linear, Decibel, Linear));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_length(v in -1e12..1e12f64) {
            let q = length::Miles::new(v);
            let back = q.to::<length::Centimeter>().to::<length::Mile>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_roundtrip_temperature(v in -1e6..1e6f64) {
            let q = temperature::DegreesFahrenheit::new(v);
            let back = q.to::<temperature::Reaumur>().to::<temperature::Fahrenheit>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_roundtrip_decibel(v in -200.0..200.0f64) {
            let q = power::DecibelWatts::new(v);
            let back = q.to::<power::Milliwatt>().to::<power::Watt>();
            prop_assert!((back.value() - v).abs() <= 1e-9);
        }

        #[test]
        fn prop_addition_is_unit_agnostic(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let in_meters = length::Meters::new(a) + length::Kilometers::new(b);
            let in_km = length::Kilometers::new(b) + length::Meters::new(a);
            prop_assert!((in_meters.to::<length::Kilometer>().value() - in_km.value()).abs() <= 1e-9 * in_km.value().abs().max(1.0));
        }
    }
}
