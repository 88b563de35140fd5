//! Solid angle units.
//!
//! The [`Steradian`] is the canonical unit. The [`SquareDegree`] is declared as the square of a degree, so a
//! product of two angles converts into either.
//!
//! ```rust
//! use dimensa_core::angle::Degrees;
//! use dimensa_core::solid_angle::SquareDegree;
//!
//! let patch = Degrees::new(2.0) * Degrees::new(3.0);
//! assert!((patch.to::<SquareDegree>().value() - 6.0).abs() < 1e-12);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait SolidAngleUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/solid_angle.rs"));
