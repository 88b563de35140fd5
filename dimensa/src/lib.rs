//! Strongly typed physical quantities with compile-time dimensional analysis.
//!
//! `dimensa` is the user-facing crate in this workspace. It re-exports the full API from `dimensa-core`, the
//! predefined unit modules, and the `#[derive(Unit)]` macro for declaring units of your own.
//!
//! A value is always a `Quantity<U>`, where `U` is a zero-sized type describing the unit. Each unit carries an exact
//! conversion factor (rational scale, power of π, affine offset, and dimension), so units stay at compile time with
//! no runtime overhead beyond the stored number.
//!
//! # What this crate solves
//!
//! - Rejects dimensionally invalid code at build time: metres cannot be added to seconds.
//! - Derives result units of `*` and `/` automatically: `length / time` is a velocity.
//! - Makes conversion explicit and exact up to the final rounding (`to::<TargetUnit>()`), including temperature
//!   offsets and decibel levels.
//!
//! # What this crate does not try to solve
//!
//! - Runtime unit parsing or a dynamic unit registry.
//! - Arbitrary-precision arithmetic: quantities are backed by `f64` or `f32`.
//!
//! # Quick start
//!
//! Convert degrees to radians:
//!
//! ```rust
//! use dimensa::{Degrees, Radian};
//!
//! let a = Degrees::new(180.0);
//! let r = a.to::<Radian>();
//! assert!((r.value() - core::f64::consts::PI).abs() < 1e-12);
//! ```
//!
//! Compose and use derived units (velocity = length / time):
//!
//! ```rust
//! use dimensa::velocity::Velocity;
//! use dimensa::{Kilometer, Kilometers, Second, Seconds};
//!
//! let d = Kilometers::new(1_000.0);
//! let t = Seconds::new(100.0);
//! let v: Velocity<Kilometer, Second> = d / t;
//! assert!((v.value() - 10.0).abs() < 1e-12);
//! ```
//!
//! Declare a unit of your own; `metric_prefixes` also generates the kilo-, milli-, … family:
//!
//! ```rust
//! use dimensa::{Dimension, Quantity, Unit};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
//! #[unit(name = "smoot", symbol = "smoot", plural = Smoots, dimension = Dimension::LENGTH,
//!        ratio = 17018 / 10000, krate = dimensa, metric_prefixes)]
//! pub struct Smoot;
//!
//! let bridge = Smoots::new(364.4).to::<dimensa::Meter>();
//! assert!((bridge.value() - 620.14).abs() < 0.01);
//! let k: Quantity<Kilosmoot> = Smoots::new(1000.0).to();
//! assert!((k.value() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimensa::{Kilometers, Seconds};
//!
//! let d = Kilometers::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add a length to a time
//! ```
//!
//! ```compile_fail
//! use dimensa::{Meters, Second};
//!
//! let _ = Meters::new(1.0).to::<Second>(); // no conversion between dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules; the most common ones are also re-exported at the crate root.
//!
//! - `dimensa::length`, `dimensa::mass`, `dimensa::time`, `dimensa::angle`, `dimensa::temperature`
//! - `dimensa::current`, `dimensa::substance`, `dimensa::luminous_intensity`
//! - `dimensa::area`, `dimensa::volume`, `dimensa::velocity`, `dimensa::acceleration`, `dimensa::frequency`
//! - `dimensa::force`, `dimensa::energy`, `dimensa::power`, `dimensa::pressure`
//! - `dimensa::charge`, `dimensa::voltage`, `dimensa::solid_angle`
//! - `dimensa::concentration`, `dimensa::unitless`, `dimensa::data`
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimensa-core`.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the raw value, or `{value, unit}` through
//!   `serde_with_unit`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimensa = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Unit algebra is evaluated at compile time, so an overflowing or ill-formed factor fails the build instead of
//! panicking. Arithmetic on values follows IEEE-754. The one fallible runtime operation is converting a time
//! quantity into a `core::time::Duration`, which returns [`QuantityError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimensa_core::*;

/// Derive macro declaring a unit marker type.
///
/// Outside `dimensa-core` pass `krate = dimensa` so the generated impls name this crate's paths.
pub use dimensa_derive::Unit;

pub use dimensa_core::units::angle::*;
pub use dimensa_core::units::length::*;
pub use dimensa_core::units::mass::*;
pub use dimensa_core::units::power::*;
pub use dimensa_core::units::temperature::*;
pub use dimensa_core::units::time::*;
pub use dimensa_core::units::velocity::*;
