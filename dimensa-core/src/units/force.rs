//! Force units.
//!
//! The canonical unit is the [`Newton`] (`kg·m·s⁻²`). The gravitational units use standard gravity
//! (`g₀ = 9.806 65 m/s²`) and the avoirdupois pound.
//!
//! ```rust
//! use dimensa_core::force::{Newton, PoundsForce};
//!
//! let n = PoundsForce::new(1.0).to::<Newton>();
//! assert!((n.value() - 4.448_221_615_260_5).abs() < 1e-12);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait ForceUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/force.rs"));
