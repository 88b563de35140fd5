//! Literal construction and explicit casts.
//!
//! ```rust
//! use dimensa_core::length::{Kilometer, Kilometers};
//! use dimensa_core::{quantity, unit_cast};
//!
//! const LEG: Kilometers = quantity::<Kilometer>(42.195);
//! let rounded: f32 = unit_cast::<f32, _, _, _>(LEG);
//! assert_eq!(rounded, 42.195_f32);
//! ```

use crate::quantity::Quantity;
use crate::scalar::Scalar;
use crate::scale::Scale;
use crate::unit::Unit;
use num_traits::AsPrimitive;

/// `value` in unit `U`, usable in `const` items.
#[inline]
pub const fn quantity<U: Unit>(value: f64) -> Quantity<U> {
    Quantity::new(value)
}

/// Casts the raw value of `q` to `N` with `as` semantics; the unit is dropped and no conversion happens.
#[inline]
pub fn unit_cast<N, U, T, S>(q: Quantity<U, T, S>) -> N
where
    U: Unit,
    T: Scalar + AsPrimitive<N>,
    S: Scale,
    N: Copy + 'static,
{
    q.value_as::<N>()
}
