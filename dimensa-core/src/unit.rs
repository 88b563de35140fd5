//! Unit types and traits.

use crate::compound::{Per, Prod};
use crate::factor::ConversionFactor;
use crate::scalar::Scalar;
use crate::scale::Linear;
use crate::Quantity;
use core::fmt::{self, Debug, Formatter};

/// Trait implemented by every **unit** type.
///
/// * `FACTOR` is the exact [`ConversionFactor`] from this unit to the canonical base units of its dimension.
///   Example: `Kilometer::FACTOR` has scale `1000` and dimension `m`, because `1 km = 1000 m`.
///
/// * `SYMBOL` and `NAME` are the printable abbreviation and long name (e.g. `"km"` and `"kilometre"`).
///
/// Compound units ([`Per`], [`Prod`], …) leave `SYMBOL`/`NAME` empty and render through
/// [`Unit::fmt_symbol`]/[`Unit::fmt_name`] instead.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in units are unit structs with no fields).
/// - `FACTOR` must have a non-zero scale.
pub trait Unit: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Unit-to-base conversion factor.
    const FACTOR: ConversionFactor;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Long name (singular).
    const NAME: &'static str;

    /// Writes the symbol.
    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(Self::SYMBOL)
    }

    /// Writes the long name.
    fn fmt_name(f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }

    /// `false` for units that render without any symbol (plain numbers).
    fn has_symbol() -> bool {
        !Self::SYMBOL.is_empty()
    }
}

/// Units that carry a reference amount, as opposed to the bare ratio [`Unitless`].
///
/// On the [`Decibel`](crate::Decibel) scale this is what separates `dBW` (referenced to one watt) from plain `dB`;
/// the decibel addition rules dispatch on it. Every declared unit and every compound unit implements it;
/// [`Unitless`] never does.
pub trait ReferenceUnit: Unit {}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` represents a dimensionless unit with a conversion factor of one and an empty symbol. It is used to
/// model the result of simplifying same-unit ratios (e.g., `Meters / Meters`) into a plain "number-like"
/// `Quantity<Unitless>`, and as the plain-ratio unit of decibel quantities.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const FACTOR: ConversionFactor = ConversionFactor::DIMENSIONLESS;
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";
}

/// Displays a unit's symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Symbol<U>(core::marker::PhantomData<U>);

impl<U: Unit> Symbol<U> {
    /// Symbol of `U`.
    pub const fn of() -> Self {
        Symbol(core::marker::PhantomData)
    }
}

impl<U: Unit> fmt::Display for Symbol<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        U::fmt_symbol(f)
    }
}

/// Displays a unit's long name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Name<U>(core::marker::PhantomData<U>);

impl<U: Unit> Name<U> {
    /// Name of `U`.
    pub const fn of() -> Self {
        Name(core::marker::PhantomData)
    }
}

impl<U: Unit> fmt::Display for Name<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        U::fmt_name(f)
    }
}

/// Trait for simplifying composite unit types.
///
/// This allows reducing complex unit expressions to simpler forms, such as `Per<U, U>` to `Unitless` or
/// `Per<N, Per<N, D>>` to `D`. The conversion factors on both sides are identical, so the stored value is kept as is.
pub trait Simplify {
    /// The simplified quantity type.
    type Out;
    /// Convert this quantity to its simplified unit.
    fn simplify(self) -> Self::Out;
}

impl<U: Unit, T: Scalar> Simplify for Quantity<Per<U, U>, T, Linear> {
    type Out = Quantity<Unitless, T, Linear>;
    /// ```rust
    /// use dimensa_core::length::Meters;
    /// use dimensa_core::{Quantity, Simplify, Unitless};
    ///
    /// let ratio = Meters::new(1.0) / Meters::new(2.0);
    /// let unitless: Quantity<Unitless> = ratio.simplify();
    /// assert!((unitless.value() - 0.5).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Self::Out {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, T: Scalar> Simplify for Quantity<Per<N, Per<N, D>>, T, Linear> {
    type Out = Quantity<D, T, Linear>;
    fn simplify(self) -> Self::Out {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, T: Scalar> Simplify for Quantity<Prod<Per<N, D>, D>, T, Linear> {
    type Out = Quantity<N, T, Linear>;
    /// ```rust
    /// use dimensa_core::length::{Meter, Meters};
    /// use dimensa_core::time::{Second, Seconds};
    /// use dimensa_core::{Per, Quantity, Simplify};
    ///
    /// let v: Quantity<Per<Meter, Second>> = Quantity::new(3.0);
    /// let d: Meters = (v * Seconds::new(4.0)).simplify();
    /// assert_eq!(d.value(), 12.0);
    /// ```
    fn simplify(self) -> Self::Out {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, T: Scalar> Simplify for Quantity<Prod<D, Per<N, D>>, T, Linear> {
    type Out = Quantity<N, T, Linear>;
    fn simplify(self) -> Self::Out {
        Quantity::new(self.value())
    }
}
