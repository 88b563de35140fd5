//! Quantity type and its implementations.

use crate::compound::{Per, Pow, Prod};
use crate::factor::{Conversion, ConversionFactor};
use crate::scalar::Scalar;
use crate::scale::{Decibel, Linear, Scale};
use crate::unit::{Name, ReferenceUnit, Symbol, Unit, Unitless};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;
use num_traits::AsPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Conversion map between two units, checked and folded by the compiler.
///
/// Evaluated inside an inline `const` block, so a dimension mismatch is a build error at the call site that
/// instantiates it.
const fn checked_conversion(from: &ConversionFactor, to: &ConversionFactor) -> Conversion {
    assert!(
        from.is_convertible(to),
        "dimension mismatch: units measure different quantities"
    );
    if from.equals(to) {
        Conversion::IDENTITY
    } else {
        from.conversion_to(to)
    }
}

/// A quantity with a specific unit.
///
/// `Quantity<U, T, S>` wraps a number `T` together with phantom type information about its unit `U` and its scale
/// `S`. This enables compile-time dimensional analysis while maintaining zero runtime cost: every conversion factor
/// is folded into a constant, and the runtime work of a conversion is one multiply-add.
///
/// # Examples
///
/// ```rust
/// use dimensa_core::length::{Kilometers, Meter};
///
/// let x = Kilometers::new(1.5);
/// let m = x.to::<Meter>();
/// assert_eq!(m.value(), 1500.0);
/// ```
///
/// Mixing dimensions does not compile:
///
/// ```compile_fail
/// use dimensa_core::length::Meters;
/// use dimensa_core::time::Seconds;
///
/// let _ = Meters::new(1.0) + Seconds::new(1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U, T = f64, S = Linear>(T, PhantomData<(U, S)>);

impl<U: Unit, T: Scalar, S: Scale> Quantity<U, T, S> {
    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use dimensa_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use dimensa_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    /// Returns the raw value cast with `as` semantics to another numeric type.
    ///
    /// ```rust
    /// use dimensa_core::length::Meters;
    /// assert_eq!(Meters::new(2.9).value_as::<i32>(), 2);
    /// ```
    #[inline]
    pub fn value_as<N>(self) -> N
    where
        T: AsPrimitive<N>,
        N: Copy + 'static,
    {
        self.0.as_()
    }

    /// Converts this quantity to another unit of the same dimension, keeping the scale.
    ///
    /// Conversions go through the linear domain, so decibel quantities convert correctly (`dBW` to `dBm` adds 30).
    ///
    /// ```rust
    /// use dimensa_core::temperature::{DegreesCelsius, Kelvin};
    ///
    /// let k = DegreesCelsius::new(0.0).to::<Kelvin>();
    /// assert!((k.value() - 273.15).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn to<V: Unit>(self) -> Quantity<V, T, S> {
        self.to_scale::<V, S>()
    }

    /// Converts to another unit and another scale.
    ///
    /// ```rust
    /// use dimensa_core::power::{DecibelMilliwatts, Watt};
    /// use dimensa_core::Linear;
    ///
    /// let w = DecibelMilliwatts::new(30.0).to_scale::<Watt, Linear>();
    /// assert!((w.value() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to_scale<V: Unit, S2: Scale>(self) -> Quantity<V, T, S2> {
        let conversion = const { checked_conversion(&U::FACTOR, &V::FACTOR) };
        let amount = S::linearize(self.0);
        let converted = amount * T::from_f64(conversion.multiplier) + T::from_f64(conversion.offset);
        Quantity::new(S2::delinearize(converted))
    }

    /// Builds this quantity from another unit of the same dimension and scale.
    #[inline]
    pub fn from_quantity<V: Unit>(other: Quantity<V, T, S>) -> Self {
        other.to::<U>()
    }

    /// Adds one to the stored value.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.0 = self.0 + T::one();
        self
    }

    /// Subtracts one from the stored value.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.0 = self.0 - T::one();
        self
    }

    /// Long name of the unit, including the scale (`"decibel watt"`).
    ///
    /// ```rust
    /// use dimensa_core::length::Kilometers;
    /// assert_eq!(Kilometers::new(1.0).name().to_string(), "kilometre");
    /// ```
    #[inline]
    pub fn name(&self) -> UnitName<U, S> {
        UnitName(PhantomData)
    }

    /// Abbreviation of the unit, including the scale (`"dBW"`).
    ///
    /// ```rust
    /// use dimensa_core::power::DecibelWatts;
    /// assert_eq!(DecibelWatts::new(3.0).abbreviation().to_string(), "dBW");
    /// ```
    #[inline]
    pub fn abbreviation(&self) -> Abbreviation<U, S> {
        Abbreviation(PhantomData)
    }
}

impl<U: Unit> Quantity<U> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use dimensa_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Zero in this unit.
    pub const ZERO: Self = Self::new(0.0);

    /// Const conversion to another unit of the same dimension.
    ///
    /// ```rust
    /// use dimensa_core::length::{Foot, Meters};
    ///
    /// const LIMIT: f64 = Meters::new(0.3048).convert::<Foot>().value();
    /// assert!((LIMIT - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn convert<V: Unit>(self) -> Quantity<V> {
        let conversion = const { checked_conversion(&U::FACTOR, &V::FACTOR) };
        Quantity::new(conversion.apply(self.0))
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use dimensa_core::angle::Degrees;
    /// let a = Degrees::new(-10.0);
    /// assert_eq!(a.abs().value(), 10.0);
    /// ```
    #[inline]
    pub const fn abs(self) -> Self {
        Self::new(f64::from_bits(self.0.to_bits() & !(1u64 << 63)))
    }

    /// Returns the minimum of this quantity and another; NaN loses.
    ///
    /// ```rust
    /// use dimensa_core::length::Meters;
    /// let a = Meters::new(3.0);
    /// let b = Meters::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        #[allow(clippy::eq_op)]
        let self_nan = self.0 != self.0;
        if self_nan || other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of this quantity and another; NaN loses.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        #[allow(clippy::eq_op)]
        let self_nan = self.0 != self.0;
        if self_nan || other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Const addition of two quantities in the same unit.
    ///
    /// ```rust
    /// use dimensa_core::length::Meters;
    /// const SUM: Meters = Meters::new(1.0).add(Meters::new(2.0));
    /// assert_eq!(SUM.value(), 3.0);
    /// ```
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }

    /// Const subtraction of two quantities in the same unit.
    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }

    /// Const product; the result unit is `Prod<U, V>`.
    #[inline]
    pub const fn mul<V: Unit>(self, other: Quantity<V>) -> Quantity<Prod<U, V>> {
        Quantity::new(self.0 * other.0)
    }

    /// Const quotient; the result unit is `Per<U, V>`.
    ///
    /// For a plain number, [`Simplify`](crate::Simplify) the result or convert it with `f64::from`.
    #[inline]
    pub const fn div<V: Unit>(self, other: Quantity<V>) -> Quantity<Per<U, V>> {
        Quantity::new(self.0 / other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display, names and abbreviations
// ─────────────────────────────────────────────────────────────────────────────

/// Unit abbreviation of a quantity, returned by [`Quantity::abbreviation`].
#[derive(Clone, Copy, Debug)]
pub struct Abbreviation<U, S>(PhantomData<(U, S)>);

impl<U: Unit, S: Scale> fmt::Display for Abbreviation<U, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(S::SYMBOL_PREFIX)?;
        write!(f, "{}", Symbol::<U>::of())
    }
}

/// Unit name of a quantity, returned by [`Quantity::name`].
#[derive(Clone, Copy, Debug)]
pub struct UnitName<U, S>(PhantomData<(U, S)>);

impl<U: Unit, S: Scale> fmt::Display for UnitName<U, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(S::NAME_PREFIX)?;
        if !S::NAME_PREFIX.is_empty() && U::has_symbol() {
            f.write_str(" ")?;
        }
        write!(f, "{}", Name::<U>::of())
    }
}

impl<U: Unit, T: Scalar + fmt::Display, S: Scale> fmt::Display for Quantity<U, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        if U::has_symbol() || !S::SYMBOL_PREFIX.is_empty() {
            write!(f, " {}", Abbreviation::<U, S>(PhantomData))?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons (across units of one dimension)
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, V: Unit, T: Scalar, S: Scale> PartialEq<Quantity<V, T, S>> for Quantity<U, T, S> {
    #[inline]
    fn eq(&self, other: &Quantity<V, T, S>) -> bool {
        self.0 == other.to::<U>().0
    }
}

impl<U: Unit, V: Unit, T: Scalar, S: Scale> PartialOrd<Quantity<V, T, S>> for Quantity<U, T, S> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<V, T, S>) -> Option<Ordering> {
        self.0.partial_cmp(&other.to::<U>().0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Linear-scale operators
// ─────────────────────────────────────────────────────────────────────────────

impl<A: Unit, B: Unit, T: Scalar> Add<Quantity<B, T>> for Quantity<A, T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<B, T>) -> Self {
        Self::new(self.0 + rhs.to::<A>().0)
    }
}

impl<A: Unit, B: Unit, T: Scalar> AddAssign<Quantity<B, T>> for Quantity<A, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<B, T>) {
        self.0 = self.0 + rhs.to::<A>().0;
    }
}

impl<A: Unit, B: Unit, T: Scalar> Sub<Quantity<B, T>> for Quantity<A, T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<B, T>) -> Self {
        Self::new(self.0 - rhs.to::<A>().0)
    }
}

impl<A: Unit, B: Unit, T: Scalar> SubAssign<Quantity<B, T>> for Quantity<A, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<B, T>) {
        self.0 = self.0 - rhs.to::<A>().0;
    }
}

impl<A: Unit, B: Unit, T: Scalar> Mul<Quantity<B, T>> for Quantity<A, T> {
    type Output = Quantity<Prod<A, B>, T>;
    #[inline]
    fn mul(self, rhs: Quantity<B, T>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<N: Unit, D: Unit, T: Scalar> Div<Quantity<D, T>> for Quantity<N, T> {
    type Output = Quantity<Per<N, D>, T>;
    #[inline]
    fn div(self, rhs: Quantity<D, T>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<A: Unit, B: Unit, T: Scalar> MulAssign<Quantity<B, T>> for Quantity<A, T> {
    /// Scales by a dimensionless quantity (`length *= 50 %`).
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity<B, T>) {
        self.0 = self.0 * rhs.to::<Unitless>().0;
    }
}

impl<A: Unit, B: Unit, T: Scalar> DivAssign<Quantity<B, T>> for Quantity<A, T> {
    /// Divides by a dimensionless quantity.
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<B, T>) {
        self.0 = self.0 / rhs.to::<Unitless>().0;
    }
}

impl<U: Unit, T: Scalar, S: Scale> Neg for Quantity<U, T, S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

/// Operators against the bare number, written per concrete float so they do not overlap with the quantity
/// operators above.
macro_rules! impl_scalar_ops {
    ($($t:ty),+) => {$(
        impl<U: Unit> Mul<$t> for Quantity<U, $t> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $t) -> Self {
                Self::new(self.0 * rhs)
            }
        }

        impl<U: Unit> Mul<Quantity<U, $t>> for $t {
            type Output = Quantity<U, $t>;
            #[inline]
            fn mul(self, rhs: Quantity<U, $t>) -> Self::Output {
                rhs * self
            }
        }

        impl<U: Unit> Div<$t> for Quantity<U, $t> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $t) -> Self {
                Self::new(self.0 / rhs)
            }
        }

        impl<U: Unit> Div<Quantity<U, $t>> for $t {
            type Output = Quantity<crate::compound::Inv<U>, $t>;
            #[inline]
            fn div(self, rhs: Quantity<U, $t>) -> Self::Output {
                Quantity::new(self / rhs.0)
            }
        }

        impl<U: Unit> Rem<$t> for Quantity<U, $t> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: $t) -> Self {
                Self::new(self.0 % rhs)
            }
        }

        impl<U: Unit> MulAssign<$t> for Quantity<U, $t> {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                self.0 *= rhs;
            }
        }

        impl<U: Unit> DivAssign<$t> for Quantity<U, $t> {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                self.0 /= rhs;
            }
        }

        impl<U: Unit, S: Scale> PartialEq<$t> for Quantity<U, $t, S> {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.0 == *other
            }
        }

        impl<U: Unit> From<$t> for Quantity<U, $t> {
            #[inline]
            fn from(value: $t) -> Self {
                Self::new(value)
            }
        }

        /// The value as a plain number, with the unit's scale applied (`50 %` becomes `0.5`).
        ///
        /// Only dimensionless units convert; anything else fails to build.
        impl<U: Unit> From<Quantity<U, $t>> for $t {
            #[inline]
            fn from(quantity: Quantity<U, $t>) -> $t {
                quantity.to::<Unitless>().0
            }
        }

        /// Adds a plain number to a dimensionless quantity.
        impl<U: Unit> Add<$t> for Quantity<U, $t> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: $t) -> Self {
                self + Quantity::<Unitless, $t>::new(rhs)
            }
        }

        impl<U: Unit> Add<Quantity<U, $t>> for $t {
            type Output = Quantity<U, $t>;
            #[inline]
            fn add(self, rhs: Quantity<U, $t>) -> Self::Output {
                rhs + self
            }
        }

        /// Subtracts a plain number from a dimensionless quantity.
        impl<U: Unit> Sub<$t> for Quantity<U, $t> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: $t) -> Self {
                self - Quantity::<Unitless, $t>::new(rhs)
            }
        }

        impl<U: Unit> Sub<Quantity<U, $t>> for $t {
            type Output = Quantity<U, $t>;
            #[inline]
            fn sub(self, rhs: Quantity<U, $t>) -> Self::Output {
                -(rhs - self)
            }
        }
    )+};
}

impl_scalar_ops!(f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Decibel-scale operators
// ─────────────────────────────────────────────────────────────────────────────
//
// `Unitless` is the plain ratio (dB); every other unit is a reference (dBW, dBm, …). Adding a ratio to a
// referenced level scales the level; two referenced levels multiply into the squared unit.

impl<A: ReferenceUnit, T: Scalar> Add<Quantity<Unitless, T, Decibel>> for Quantity<A, T, Decibel> {
    type Output = Self;
    /// `dBW + dB → dBW`
    #[inline]
    fn add(self, rhs: Quantity<Unitless, T, Decibel>) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<B: ReferenceUnit, T: Scalar> Add<Quantity<B, T, Decibel>> for Quantity<Unitless, T, Decibel> {
    type Output = Quantity<B, T, Decibel>;
    /// `dB + dBW → dBW`
    #[inline]
    fn add(self, rhs: Quantity<B, T, Decibel>) -> Self::Output {
        Quantity::new(self.0 + rhs.0)
    }
}

impl<T: Scalar> Add for Quantity<Unitless, T, Decibel> {
    type Output = Self;
    /// `dB + dB → dB`
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<A: ReferenceUnit, B: ReferenceUnit, T: Scalar> Add<Quantity<B, T, Decibel>> for Quantity<A, T, Decibel> {
    type Output = Quantity<Pow<A, 2>, T, Decibel>;
    /// `dBW + dBm → dB(W²)`; the right operand is converted into the left unit first.
    #[inline]
    fn add(self, rhs: Quantity<B, T, Decibel>) -> Self::Output {
        Quantity::new(self.0 + rhs.to::<A>().0)
    }
}

impl<A: ReferenceUnit, T: Scalar> Sub<Quantity<Unitless, T, Decibel>> for Quantity<A, T, Decibel> {
    type Output = Self;
    /// `dBW − dB → dBW`
    #[inline]
    fn sub(self, rhs: Quantity<Unitless, T, Decibel>) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<T: Scalar> Sub for Quantity<Unitless, T, Decibel> {
    type Output = Self;
    /// `dB − dB → dB`
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<A: ReferenceUnit, B: ReferenceUnit, T: Scalar> Sub<Quantity<B, T, Decibel>> for Quantity<A, T, Decibel> {
    type Output = Quantity<Unitless, T, Decibel>;
    /// `dBW − dBm → dB`, the ratio of the two levels.
    #[inline]
    fn sub(self, rhs: Quantity<B, T, Decibel>) -> Self::Output {
        Quantity::new(self.0 - rhs.to::<A>().0)
    }
}

impl<U: Unit, T: Scalar> AddAssign<Quantity<Unitless, T, Decibel>> for Quantity<U, T, Decibel> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<Unitless, T, Decibel>) {
        self.0 = self.0 + rhs.0;
    }
}

impl<U: Unit, T: Scalar> SubAssign<Quantity<Unitless, T, Decibel>> for Quantity<U, T, Decibel> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<Unitless, T, Decibel>) {
        self.0 = self.0 - rhs.0;
    }
}

impl<U: Unit, T: Scalar> From<Quantity<U, T, Decibel>> for Quantity<U, T, Linear> {
    #[inline]
    fn from(level: Quantity<U, T, Decibel>) -> Self {
        level.to_scale::<U, Linear>()
    }
}

impl<U: Unit, T: Scalar> From<Quantity<U, T, Linear>> for Quantity<U, T, Decibel> {
    #[inline]
    fn from(amount: Quantity<U, T, Linear>) -> Self {
        amount.to_scale::<U, Decibel>()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, T: Scalar + Serialize, S: Scale> Serialize for Quantity<U, T, S> {
    fn serialize<Z>(&self, serializer: Z) -> core::result::Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, T: Scalar + Deserialize<'de>, S: Scale> Deserialize<'de> for Quantity<U, T, S> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit symbols in serialized data. The symbol
/// written is the full abbreviation, scale included (`"dBW"`).
///
/// # Examples
///
/// ```rust
/// use dimensa_core::length::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "dimensa_core::serde_with_unit")]
///     max_distance: Meters,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Meters,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;
    use std::string::{String, ToString};

    /// Serializes a `Quantity` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<U, T, S, Z>(quantity: &Quantity<U, T, S>, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        U: Unit,
        T: Scalar + Serialize,
        S: Scale,
        Z: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.0)?;
        state.serialize_field("unit", &quantity.abbreviation().to_string())?;
        state.end()
    }

    /// Deserializes a `Quantity` from a struct with `value` and optionally `unit` fields.
    ///
    /// A missing `unit` is accepted; a present one must match the abbreviation of the target type.
    pub fn deserialize<'de, U, T, S, D>(deserializer: D) -> Result<Quantity<U, T, S>, D::Error>
    where
        U: Unit,
        T: Scalar + Deserialize<'de>,
        S: Scale,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, T, S>(PhantomData<(U, T, S)>);

        impl<'de, U: Unit, T: Scalar + Deserialize<'de>, S: Scale> Visitor<'de> for QuantityVisitor<U, T, S> {
            type Value = Quantity<U, T, S>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, T, S>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = unit {
                    let expected = Abbreviation::<U, S>(PhantomData).to_string();
                    if found != expected {
                        log::debug!("rejecting serialized quantity: unit '{found}' where '{expected}' was expected");
                        return Err(de::Error::custom(format_args!(
                            "unit mismatch: expected '{expected}', found '{found}'"
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}
