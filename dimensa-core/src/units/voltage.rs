//! Electric potential units.
//!
//! The canonical unit is the [`Volt`] (`W/A`), with the full metric prefix family.
//!
//! ```rust
//! use dimensa_core::voltage::{Millivolts, Volt};
//!
//! let v = Millivolts::new(3300.0).to::<Volt>();
//! assert!((v.value() - 3.3).abs() < 1e-12);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait VoltageUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/voltage.rs"));
