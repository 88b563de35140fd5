//! Angular quantities.
//!
//! The canonical unit is the [`Radian`]. Degree-based units keep their factor of π symbolic (`1° = π/180 rad`), so
//! conversions among degrees, arcseconds, gradians and turns are exact rationals and only conversions to and from
//! radians involve π.
//!
//! Every angle quantity has `sin`, `cos`, `tan` and `sin_cos`, evaluated in radians. The inverse functions live in
//! [`math`](crate::math) and return [`Radians`].
//!
//! ```rust
//! use dimensa_core::angle::{Degrees, Radians};
//!
//! let angle: Degrees = Degrees::new(90.0);
//! let r: Radians = angle.to();
//! assert!((r.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!((angle.sin() - 1.0).abs() < 1e-12);
//! ```

use crate::{Quantity, Unit};
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait AngleUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/angle.rs"));

impl<U: AngleUnit> Quantity<U> {
    /// Sine of the angle.
    #[inline]
    pub fn sin(&self) -> f64 {
        let x = self.to::<Radian>().value();
        #[cfg(feature = "std")]
        {
            x.sin()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::sin(x)
        }
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(&self) -> f64 {
        let x = self.to::<Radian>().value();
        #[cfg(feature = "std")]
        {
            x.cos()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::cos(x)
        }
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(&self) -> f64 {
        let x = self.to::<Radian>().value();
        #[cfg(feature = "std")]
        {
            x.tan()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::tan(x)
        }
    }

    /// Sine and cosine in one call.
    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        let x = self.to::<Radian>().value();
        #[cfg(feature = "std")]
        {
            x.sin_cos()
        }
        #[cfg(not(feature = "std"))]
        {
            (crate::libm::sin(x), crate::libm::cos(x))
        }
    }
}
