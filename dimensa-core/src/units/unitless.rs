//! Dimensionless helpers.
//!
//! [`Unitless`] is the plain-number unit: it has a scale of one, an empty symbol, and it is what same-unit ratios
//! simplify to. On the decibel scale it is the *ratio* unit (dB) that shifts referenced levels such as dBW.
//!
//! ```rust
//! use dimensa_core::length::{Kilometers, Meters};
//! use dimensa_core::unitless::{Decibels, Ratio};
//! use dimensa_core::Unitless;
//!
//! let r: Ratio = (Kilometers::new(3.0) / Meters::new(1500.0)).to::<Unitless>();
//! assert!((r.value() - 2.0).abs() < 1e-12);
//!
//! let gain = Decibels::from_ratio(100.0);
//! assert!((gain.value() - 20.0).abs() < 1e-12);
//! ```

use crate::{Decibel, Quantity, Scale, Unitless};

/// A plain dimensionless number.
pub type Ratio = Quantity<Unitless>;

/// A power ratio in decibels, with no reference unit.
pub type Decibels = Quantity<Unitless, f64, Decibel>;

impl Decibels {
    /// Level of a linear power ratio (`10·log10(ratio)`).
    #[inline]
    pub fn from_ratio(ratio: f64) -> Self {
        Self::new(Decibel::delinearize(ratio))
    }

    /// The linear power ratio this level stands for.
    #[inline]
    pub fn ratio(self) -> f64 {
        Decibel::linearize(self.value())
    }
}
