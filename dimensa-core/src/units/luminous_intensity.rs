//! Luminous intensity units.
//!
//! The [`Candela`] is a base unit; this module carries it and its metric prefix family.

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait LuminousIntensityUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/luminous_intensity.rs"));
