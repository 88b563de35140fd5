//! Dimensionless concentration units.
//!
//! Each unit here is a pure number with a scale: `1 % = 1/100`, `1 ‰ = 1/1000`, and so on. They convert among
//! themselves, to [`Unitless`](crate::Unitless), and to a plain `f64`.
//!
//! ```rust
//! use dimensa_core::concentration::{PartPerMillion, Percents};
//!
//! let ppm = Percents::new(0.04).to::<PartPerMillion>();
//! assert!((ppm.value() - 400.0).abs() < 1e-9);
//! let fraction: f64 = Percents::new(12.5).into();
//! assert_eq!(fraction, 0.125);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait ConcentrationUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/concentration.rs"));
