//! Unit-aware math on linear quantities.
//!
//! Functions that change the dimension return the matching compound unit (`sqrt` of an area is a `Root<_, 2>`
//! quantity); the rest keep the unit of their input and convert any second operand into it first.
//!
//! Transcendental functions take plain [`Unitless`] ratios. The inverse trigonometric and inverse hyperbolic
//! functions return [`Radian`] quantities, and the hyperbolic functions accept an angle in any unit.
//!
//! ```rust
//! use dimensa_core::length::{Meter, Meters};
//! use dimensa_core::{math, Quantity};
//!
//! let side = math::sqrt(Meters::new(3.0) * Meters::new(12.0));
//! let side: Meters = side.to::<Meter>();
//! assert!((side.value() - 6.0).abs() < 1e-12);
//! ```

use crate::angle::{AngleUnit, Radian};
use crate::compound::{Pow, Root};
use crate::quantity::Quantity;
use crate::scalar::Scalar;
use crate::unit::{Unit, Unitless};

/// Square root; the unit becomes `Root<U, 2>`.
#[inline]
pub fn sqrt<U: Unit, T: Scalar>(q: Quantity<U, T>) -> Quantity<Root<U, 2>, T> {
    Quantity::new(q.value().sqrt())
}

/// Cube root; the unit becomes `Root<U, 3>`.
#[inline]
pub fn cbrt<U: Unit, T: Scalar>(q: Quantity<U, T>) -> Quantity<Root<U, 3>, T> {
    Quantity::new(q.value().cbrt())
}

/// Integer power; the unit becomes `Pow<U, N>`.
#[inline]
pub fn powi<const N: i32, U: Unit, T: Scalar>(q: Quantity<U, T>) -> Quantity<Pow<U, N>, T> {
    Quantity::new(q.value().powi(N))
}

/// Absolute value.
#[inline]
pub fn abs<U: Unit, T: Scalar>(q: Quantity<U, T>) -> Quantity<U, T> {
    Quantity::new(q.value().abs())
}

/// `sqrt(a² + b²)`, in the unit of `a`.
#[inline]
pub fn hypot<A: Unit, B: Unit, T: Scalar>(a: Quantity<A, T>, b: Quantity<B, T>) -> Quantity<A, T> {
    Quantity::new(a.value().hypot(b.to::<A>().value()))
}

/// Smaller of two quantities, in the unit of `a`.
#[inline]
pub fn min<A: Unit, B: Unit, T: Scalar>(a: Quantity<A, T>, b: Quantity<B, T>) -> Quantity<A, T> {
    Quantity::new(a.value().min(b.to::<A>().value()))
}

/// Larger of two quantities, in the unit of `a`.
#[inline]
pub fn max<A: Unit, B: Unit, T: Scalar>(a: Quantity<A, T>, b: Quantity<B, T>) -> Quantity<A, T> {
    Quantity::new(a.value().max(b.to::<A>().value()))
}

/// Rounds toward negative infinity.
#[inline]
pub fn floor<U: Unit, T: Scalar>(q: Quantity<U, T>) -> Quantity<U, T> {
    Quantity::new(q.value().floor())
}

/// Rounds toward positive infinity.
#[inline]
pub fn ceil<U: Unit, T: Scalar>(q: Quantity<U, T>) -> Quantity<U, T> {
    Quantity::new(q.value().ceil())
}

/// Rounds half away from zero.
#[inline]
pub fn round<U: Unit, T: Scalar>(q: Quantity<U, T>) -> Quantity<U, T> {
    Quantity::new(q.value().round())
}

/// Remainder of `a / b` with the sign of `a`, in the unit of `a`.
#[inline]
pub fn fmod<A: Unit, B: Unit, T: Scalar>(a: Quantity<A, T>, b: Quantity<B, T>) -> Quantity<A, T> {
    Quantity::new(a.value() % b.to::<A>().value())
}

/// Magnitude of `magnitude` with the sign of `sign`.
#[inline]
pub fn copysign<A: Unit, B: Unit, T: Scalar>(magnitude: Quantity<A, T>, sign: Quantity<B, T>) -> Quantity<A, T> {
    Quantity::new(magnitude.value().copysign(sign.value()))
}

/// `a · factor + addend` with one rounding; `addend` is converted into the unit of `a · factor`.
#[inline]
pub fn mul_add<A: Unit, F: Unit, C: Unit, T: Scalar>(
    a: Quantity<A, T>,
    factor: Quantity<F, T>,
    addend: Quantity<C, T>,
) -> Quantity<crate::Prod<A, F>, T> {
    let addend = addend.to::<crate::Prod<A, F>>();
    Quantity::new(a.value().mul_add(factor.value(), addend.value()))
}

/// Rounds toward zero.
#[inline]
pub fn trunc<U: Unit, T: Scalar>(q: Quantity<U, T>) -> Quantity<U, T> {
    Quantity::new(q.value().trunc())
}

/// Integral and fractional parts, both carrying the sign of `q`.
#[inline]
pub fn modf<U: Unit, T: Scalar>(q: Quantity<U, T>) -> (Quantity<U, T>, Quantity<U, T>) {
    let v = q.value();
    (Quantity::new(v.trunc()), Quantity::new(v.fract()))
}

/// Positive difference `max(a - b, 0)`, in the unit of `a`.
#[inline]
pub fn fdim<A: Unit, B: Unit, T: Scalar>(a: Quantity<A, T>, b: Quantity<B, T>) -> Quantity<A, T> {
    let b = b.to::<A>().value();
    let a = a.value();
    if a.is_nan() || b.is_nan() {
        return Quantity::new(T::nan());
    }
    Quantity::new(if a > b { a - b } else { T::zero() })
}

/// Real power of a ratio.
#[inline]
pub fn pow<T: Scalar>(base: Quantity<Unitless, T>, exponent: T) -> Quantity<Unitless, T> {
    Quantity::new(base.value().powf(exponent))
}

/// `e^q`.
#[inline]
pub fn exp<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
    Quantity::new(q.value().exp())
}

/// `2^q`.
#[inline]
pub fn exp2<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
    Quantity::new(q.value().exp2())
}

/// `e^q - 1`, accurate near zero.
#[inline]
pub fn expm1<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
    Quantity::new(q.value().exp_m1())
}

/// Natural logarithm.
#[inline]
pub fn log<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
    Quantity::new(q.value().ln())
}

/// Base-10 logarithm.
#[inline]
pub fn log10<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
    Quantity::new(q.value().log10())
}

/// Base-2 logarithm.
#[inline]
pub fn log2<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
    Quantity::new(q.value().log2())
}

/// `ln(1 + q)`, accurate near zero.
#[inline]
pub fn log1p<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
    Quantity::new(q.value().ln_1p())
}

/// Arc cosine, in `[0, π]` radians.
#[inline]
pub fn acos<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Radian, T> {
    Quantity::new(q.value().acos())
}

/// Arc sine, in `[-π/2, π/2]` radians.
#[inline]
pub fn asin<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Radian, T> {
    Quantity::new(q.value().asin())
}

/// Arc tangent, in `[-π/2, π/2]` radians.
#[inline]
pub fn atan<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Radian, T> {
    Quantity::new(q.value().atan())
}

/// Four-quadrant arc tangent of `y / x`; `x` is converted into the unit of `y`, so any pair of commensurable
/// quantities works.
#[inline]
pub fn atan2<A: Unit, B: Unit, T: Scalar>(y: Quantity<A, T>, x: Quantity<B, T>) -> Quantity<Radian, T> {
    Quantity::new(y.value().atan2(x.to::<A>().value()))
}

/// Hyperbolic cosine of an angle.
#[inline]
pub fn cosh<U: AngleUnit, T: Scalar>(angle: Quantity<U, T>) -> Quantity<Unitless, T> {
    Quantity::new(angle.to::<Radian>().value().cosh())
}

/// Hyperbolic sine of an angle.
#[inline]
pub fn sinh<U: AngleUnit, T: Scalar>(angle: Quantity<U, T>) -> Quantity<Unitless, T> {
    Quantity::new(angle.to::<Radian>().value().sinh())
}

/// Hyperbolic tangent of an angle.
#[inline]
pub fn tanh<U: AngleUnit, T: Scalar>(angle: Quantity<U, T>) -> Quantity<Unitless, T> {
    Quantity::new(angle.to::<Radian>().value().tanh())
}

/// Inverse hyperbolic cosine, in radians.
#[inline]
pub fn acosh<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Radian, T> {
    Quantity::new(q.value().acosh())
}

/// Inverse hyperbolic sine, in radians.
#[inline]
pub fn asinh<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Radian, T> {
    Quantity::new(q.value().asinh())
}

/// Inverse hyperbolic tangent, in radians.
#[inline]
pub fn atanh<T: Scalar>(q: Quantity<Unitless, T>) -> Quantity<Radian, T> {
    Quantity::new(q.value().atanh())
}
