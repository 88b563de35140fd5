//! Predefined unit modules grouped by dimension.
//!
//! `dimensa-core` ships a set of built-in units so that conversions and formatting work out of the box without
//! downstream crates having to fight Rust's orphan rules. The unit declarations themselves are data: `build.rs`
//! turns each record of `units.toml` into a `#[derive(Unit)]` item, and each module below includes its generated
//! file next to its marker trait and helpers.
//!
//! ## Modules
//!
//! Base dimensions:
//!
//! - [`length`]: metre and its prefixes, imperial and astronomical lengths.
//! - [`mass`]: gram and its prefixes (the kilogram is canonical), avoirdupois units.
//! - [`time`]: second and its prefixes, calendar units, conversions to and from [`core::time::Duration`].
//! - [`angle`]: radian, degree and friends, with trig helpers.
//! - [`current`], [`temperature`], [`substance`], [`luminous_intensity`].
//!
//! Derived dimensions: [`area`], [`volume`], [`frequency`], [`velocity`], [`acceleration`], [`force`], [`energy`],
//! [`power`] (with decibel aliases), [`pressure`], [`charge`], [`voltage`], [`solid_angle`], and the
//! dimensionless [`concentration`] and [`unitless`].
//!
//! Information: [`data`], bits and bytes with SI and IEC binary prefixes.

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod charge;
pub mod concentration;
pub mod current;
pub mod data;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod luminous_intensity;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod solid_angle;
pub mod substance;
pub mod temperature;
pub mod time;
pub mod unitless;
pub mod velocity;
pub mod voltage;
pub mod volume;
