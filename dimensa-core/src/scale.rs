//! Scale strategies: how the stored number relates to the physical amount.
//!
//! - [`Linear`]: the stored number *is* the amount in the unit. Sums add.
//! - [`Decibel`]: the stored number is `10 · log10(amount / reference)`, where the reference is one of the unit.
//!   Sums multiply the underlying amounts, so only some combinations make sense (see the decibel operators on
//!   [`Quantity`](crate::Quantity)).
//!
//! Conversions between units always go through the linear domain: [`Scale::linearize`], then the affine conversion
//! map, then [`Scale::delinearize`] for the target scale.

use crate::ratio::Rational;
use crate::scalar::Scalar;
use core::fmt::Debug;

/// Runtime/const description of a scale, used by the scale predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Stored values are amounts.
    Linear,
    /// Stored values are `multiplier · log_base(amount)`.
    Logarithmic {
        /// Logarithm base.
        base: Rational,
    },
}

impl ScaleKind {
    /// Const equality.
    pub const fn equals(&self, other: &ScaleKind) -> bool {
        match (self, other) {
            (ScaleKind::Linear, ScaleKind::Linear) => true,
            (ScaleKind::Logarithmic { base: a }, ScaleKind::Logarithmic { base: b }) => a.equals(b),
            _ => false,
        }
    }
}

/// A scale strategy.
pub trait Scale: Copy + PartialEq + Debug + Default + Send + Sync + 'static {
    /// Kind descriptor.
    const KIND: ScaleKind;
    /// Text put in front of the unit symbol when displaying (`"dB"` for decibels).
    const SYMBOL_PREFIX: &'static str;
    /// Text put in front of the unit name (`"decibel"` for decibels).
    const NAME_PREFIX: &'static str;

    /// Stored value → amount in the unit.
    fn linearize<T: Scalar>(value: T) -> T;

    /// Amount in the unit → stored value.
    fn delinearize<T: Scalar>(amount: T) -> T;
}

/// Scales whose sums add (the only scale most operators accept).
pub trait LinearScale: Scale {}

/// Logarithmic scales.
pub trait LogarithmicScale: Scale {
    /// Base of the logarithm.
    const BASE: Rational;
    /// Multiplier applied to the logarithm (`10` for decibels).
    const MULTIPLIER: Rational;
}

/// The identity scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Linear;

impl Scale for Linear {
    const KIND: ScaleKind = ScaleKind::Linear;
    const SYMBOL_PREFIX: &'static str = "";
    const NAME_PREFIX: &'static str = "";

    #[inline]
    fn linearize<T: Scalar>(value: T) -> T {
        value
    }

    #[inline]
    fn delinearize<T: Scalar>(amount: T) -> T {
        amount
    }
}

impl LinearScale for Linear {}

/// Power-ratio decibels: `10 · log10(amount)`.
///
/// ```rust
/// use dimensa_core::{Decibel, Scale};
///
/// assert!((Decibel::linearize(30.0_f64) - 1000.0).abs() < 1e-9);
/// assert!((Decibel::delinearize(100.0_f64) - 20.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decibel;

impl Scale for Decibel {
    const KIND: ScaleKind = ScaleKind::Logarithmic {
        base: <Decibel as LogarithmicScale>::BASE,
    };
    const SYMBOL_PREFIX: &'static str = "dB";
    const NAME_PREFIX: &'static str = "decibel";

    #[inline]
    fn linearize<T: Scalar>(value: T) -> T {
        let ten = T::from_f64(10.0);
        ten.powf(value / ten)
    }

    #[inline]
    fn delinearize<T: Scalar>(amount: T) -> T {
        T::from_f64(10.0) * amount.log10()
    }
}

impl LogarithmicScale for Decibel {
    const BASE: Rational = Rational::integer(10);
    const MULTIPLIER: Rational = Rational::integer(10);
}
