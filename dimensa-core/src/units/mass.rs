//! Mass units.
//!
//! The canonical unit for this dimension is the **kilogram**: [`Gram`] is declared as `1/1000` of the base and
//! the metric prefix family is built on top of it, so [`Kilogram`] has a conversion scale of exactly one.
//!
//! Avoirdupois units follow the international yard and pound agreement (`1 lb = 0.45359237 kg` exactly).
//!
//! ```rust
//! use dimensa_core::mass::{Kilogram, Pounds};
//!
//! let kg = Pounds::new(1.0).to::<Kilogram>();
//! assert!((kg.value() - 0.453_592_37).abs() < 1e-15);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait MassUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/mass.rs"));

/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);
