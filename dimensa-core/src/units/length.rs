//! Length units.
//!
//! The canonical unit for this dimension is [`Meter`]. Every other length unit is an exact rational multiple of
//! the metre, except the parsec which also carries a factor of `π^-1`.
//!
//! This module provides:
//!
//! - **SI ladder**: the full metric prefix family for metres from yocto- to yotta-.
//! - **Common defined units**: ångström, inch, foot, yard, fathom, chain, furlong, (statute) mile, nautical mile.
//! - **Astronomy**: astronomical unit (au), light-year (ly), parsec (pc).
//!
//! Notes on definitions used here:
//!
//! - **Astronomical unit (au)** is **exactly** `149_597_870_700 m` (IAU 2012).
//! - **Parsec (pc)** is defined from au via `pc = au * 648000 / π`; the π is kept symbolic, not approximated.
//! - **Light-year (ly)** is derived from the exact speed of light `c = 299_792_458 m/s` and one **Julian year**
//!   (`365.25 d`, `d = 86400 s`).
//! - **Imperial units** follow the international definitions (the inch is exactly `0.0254 m`).
//!
//! ```rust
//! use dimensa_core::length::{AstronomicalUnits, Kilometer};
//!
//! let au = AstronomicalUnits::new(1.0);
//! let km = au.to::<Kilometer>();
//! assert_eq!(km.value(), 149_597_870.7);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait LengthUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/length.rs"));

/// One metre.
pub const M: Meters = Meters::new(1.0);
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);
/// One astronomical unit.
pub const AU: AstronomicalUnits = AstronomicalUnits::new(1.0);
