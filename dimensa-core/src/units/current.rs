//! Electric current units.
//!
//! The [`Ampere`] is a base unit; this module carries it and its metric prefix family.
//!
//! ```rust
//! use dimensa_core::current::{Ampere, Milliamperes};
//!
//! let a = Milliamperes::new(250.0).to::<Ampere>();
//! assert_eq!(a.value(), 0.25);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait CurrentUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/current.rs"));
