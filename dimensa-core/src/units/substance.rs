//! Amount-of-substance units.
//!
//! The [`Mole`] is a base unit; this module carries it and its metric prefix family.

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait SubstanceUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/substance.rs"));
