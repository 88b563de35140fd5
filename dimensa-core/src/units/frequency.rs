//! Frequency units and angular-rate aliases.
//!
//! [`Hertz`] (`s⁻¹`) is the canonical frequency unit. Angle counts as a dimension of its own, so an angular rate
//! such as `°/day` is *not* a frequency; it is an [`AngularFrequency`], a plain [`Per`] of an angle and a time.
//!
//! ```rust
//! use dimensa_core::angle::{Degree, Radian};
//! use dimensa_core::frequency::AngularFrequency;
//! use dimensa_core::time::Day;
//!
//! let f: AngularFrequency<Degree, Day> = AngularFrequency::new(180.0);
//! let f_rad: AngularFrequency<Radian, Day> = f.to();
//! assert!((f_rad.value() - core::f64::consts::PI).abs() < 1e-12);
//! ```

use crate::{Per, Quantity, Unit};
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait FrequencyUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/frequency.rs"));

/// A frequency in hertz. `Hertz` is its own plural, so the quantity alias is spelled out here.
pub type HertzQuantity = Quantity<Hertz>;

/// An angular rate parameterized by angle and time units.
pub type AngularFrequency<A, T> = Quantity<Per<A, T>>;
