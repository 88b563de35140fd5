//! Compile-time predicates over units and scales.
//!
//! All predicates are `const fn`, so they can drive `const` assertions:
//!
//! ```rust
//! use dimensa_core::length::{Foot, Meter};
//! use dimensa_core::time::Second;
//! use dimensa_core::{is_same_dimension, predicates};
//!
//! const _: () = assert!(predicates::is_same_dimension::<Meter, Foot>());
//! const _: () = assert!(!is_same_dimension!(Meter, Foot, Second));
//! ```
//!
//! Operators do not call these directly: scale requirements are trait bounds ([`LinearScale`](crate::LinearScale),
//! [`ReferenceUnit`](crate::ReferenceUnit)) and dimension requirements are inline `const` assertions inside the
//! operator bodies, which amount to the same checks.

use crate::scale::{Scale, ScaleKind};
use crate::unit::Unit;

/// `true` when `U` has no dimension.
#[inline]
pub const fn is_dimensionless<U: Unit>() -> bool {
    U::FACTOR.is_dimensionless()
}

/// `true` when `A` and `B` measure the same kind of quantity.
#[inline]
pub const fn is_same_dimension<A: Unit, B: Unit>() -> bool {
    A::FACTOR.dimension().equals(&B::FACTOR.dimension())
}

/// `true` when values in `A` can be converted into `B`.
#[inline]
pub const fn is_convertible<A: Unit, B: Unit>() -> bool {
    A::FACTOR.is_convertible(&B::FACTOR)
}

/// `true` for [`Linear`](crate::Linear).
#[inline]
pub const fn has_linear_scale<S: Scale>() -> bool {
    matches!(S::KIND, ScaleKind::Linear)
}

/// `true` for logarithmic scales such as [`Decibel`](crate::Decibel).
#[inline]
pub const fn has_logarithmic_scale<S: Scale>() -> bool {
    matches!(S::KIND, ScaleKind::Logarithmic { .. })
}

/// `true` when every kind in `kinds` is equal. Empty and single-element slices are trivially uniform.
pub const fn has_same_scale(kinds: &[ScaleKind]) -> bool {
    let mut i = 1;
    while i < kinds.len() {
        if !kinds[0].equals(&kinds[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Variadic [`has_same_scale`]: `has_same_scale!(Linear, Decibel, ...)`.
#[macro_export]
macro_rules! has_same_scale {
    ($($scale:ty),+ $(,)?) => {
        $crate::predicates::has_same_scale(&[$(<$scale as $crate::Scale>::KIND),+])
    };
}

/// Variadic [`is_same_dimension`]: `true` when every unit shares the first unit's dimension.
#[macro_export]
macro_rules! is_same_dimension {
    ($first:ty $(, $rest:ty)* $(,)?) => {
        true $(&& $crate::predicates::is_same_dimension::<$first, $rest>())*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concentration::Percent;
    use crate::length::{Foot, Meter};
    use crate::temperature::{Celsius, Kelvin};
    use crate::time::Second;
    use crate::{Decibel, Linear, Per, Unitless};

    #[test]
    fn dimension_predicates() {
        assert!(is_dimensionless::<Unitless>());
        assert!(is_dimensionless::<Percent>());
        assert!(is_dimensionless::<Per<Meter, Foot>>());
        assert!(!is_dimensionless::<Meter>());
        assert!(is_same_dimension::<Celsius, Kelvin>());
        assert!(is_convertible::<Meter, Foot>());
        assert!(!is_convertible::<Meter, Second>());
    }

    #[test]
    fn scale_predicates() {
        assert!(has_linear_scale::<Linear>());
        assert!(!has_linear_scale::<Decibel>());
        assert!(has_logarithmic_scale::<Decibel>());
        assert!(has_same_scale(&[]));
        assert!(has_same_scale(&[Decibel::KIND]));
        assert!(crate::has_same_scale!(Linear, Linear, Linear));
        assert!(!crate::has_same_scale!(Linear, Decibel));
    }

    #[test]
    fn variadic_dimension_macro() {
        assert!(crate::is_same_dimension!(Meter));
        assert!(crate::is_same_dimension!(Meter, Foot, Meter));
        assert!(!crate::is_same_dimension!(Meter, Foot, Second));
    }

    #[test]
    fn predicates_are_const() {
        const SAME: bool = is_same_dimension::<Per<Meter, Second>, Per<Foot, Second>>();
        const LOG: bool = has_logarithmic_scale::<Decibel>();
        assert!(SAME && LOG);
    }
}
