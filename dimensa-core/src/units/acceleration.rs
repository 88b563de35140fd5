//! Acceleration units (`Length / Time²`).
//!
//! ```rust
//! use dimensa_core::acceleration::{MetersPerSecondSquared, StandardGravities};
//!
//! let a: MetersPerSecondSquared = StandardGravities::new(1.0).to();
//! assert!((a.value() - 9.806_65).abs() < 1e-12);
//! ```

use crate::length::Meter;
use crate::time::Second;
use crate::{Per, Pow, Quantity, Unit};
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait AccelerationUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/acceleration.rs"));

/// Metres per second squared, the coherent SI acceleration.
pub type MetersPerSecondSquared = Quantity<Per<Meter, Pow<Second, 2>>>;
