//! Compound units built from other units.
//!
//! Each constructor derives its [`ConversionFactor`] from its parts through the factor algebra, so a compound unit
//! needs no declaration of its own:
//!
//! | type          | meaning    | symbol      |
//! |---------------|------------|-------------|
//! | `Prod<A, B>`  | `A · B`    | `a·b`       |
//! | `Per<A, B>`   | `A / B`    | `a/b`       |
//! | `Inv<U>`      | `1 / U`    | `1/u`       |
//! | `Pow<U, N>`   | `U^N`      | `u^N`       |
//! | `Root<U, N>`  | `U^(1/N)`  | `u^(1/N)`   |
//!
//! ```rust
//! use dimensa_core::length::Meter;
//! use dimensa_core::time::Second;
//! use dimensa_core::{Dimension, Per, Pow, Unit};
//!
//! type Accel = Per<Meter, Pow<Second, 2>>;
//! assert!(Accel::FACTOR.dimension().equals(&Dimension::ACCELERATION));
//! ```

use crate::factor::ConversionFactor;
use crate::unit::{ReferenceUnit, Unit};
use core::fmt::{self, Formatter};
use core::marker::PhantomData;

/// Product unit `A · B`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prod<A, B>(PhantomData<(A, B)>);

/// Quotient unit `N / D`.
///
/// `Per<N, D>` carries both the dimensional information and the scaling ratio between the constituent units. It is
/// generic over any numerator and denominator units, which allows implementing arithmetic generically for all pairs
/// without bespoke macros.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N, D>(PhantomData<(N, D)>);

/// Reciprocal unit `1 / U`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Inv<U>(PhantomData<U>);

/// Integer power `U^N`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Pow<U, const N: i32>(PhantomData<U>);

/// `N`-th root `U^(1/N)`; `N` must be positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Root<U, const N: i32>(PhantomData<U>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const FACTOR: ConversionFactor = A::FACTOR.mul(B::FACTOR);
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        match (A::has_symbol(), B::has_symbol()) {
            (true, true) => {
                A::fmt_symbol(f)?;
                f.write_str("·")?;
                B::fmt_symbol(f)
            }
            (true, false) => A::fmt_symbol(f),
            (false, true) => B::fmt_symbol(f),
            (false, false) => Ok(()),
        }
    }

    fn fmt_name(f: &mut Formatter<'_>) -> fmt::Result {
        A::fmt_name(f)?;
        f.write_str("-")?;
        B::fmt_name(f)
    }

    fn has_symbol() -> bool {
        A::has_symbol() || B::has_symbol()
    }
}

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const FACTOR: ConversionFactor = N::FACTOR.div(D::FACTOR);
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        if N::has_symbol() {
            N::fmt_symbol(f)?;
        } else {
            f.write_str("1")?;
        }
        if D::has_symbol() {
            f.write_str("/")?;
            D::fmt_symbol(f)?;
        }
        Ok(())
    }

    fn fmt_name(f: &mut Formatter<'_>) -> fmt::Result {
        N::fmt_name(f)?;
        f.write_str(" per ")?;
        D::fmt_name(f)
    }

    fn has_symbol() -> bool {
        N::has_symbol() || D::has_symbol()
    }
}

impl<U: Unit> Unit for Inv<U> {
    const FACTOR: ConversionFactor = U::FACTOR.recip();
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("1/")?;
        U::fmt_symbol(f)
    }

    fn fmt_name(f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("inverse ")?;
        U::fmt_name(f)
    }

    fn has_symbol() -> bool {
        U::has_symbol()
    }
}

impl<U: Unit, const N: i32> Unit for Pow<U, N> {
    const FACTOR: ConversionFactor = U::FACTOR.powi(N);
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        U::fmt_symbol(f)?;
        write!(f, "^{}", N)
    }

    fn fmt_name(f: &mut Formatter<'_>) -> fmt::Result {
        match N {
            2 => {
                f.write_str("square ")?;
                U::fmt_name(f)
            }
            3 => {
                f.write_str("cubic ")?;
                U::fmt_name(f)
            }
            _ => {
                U::fmt_name(f)?;
                write!(f, " to the power {}", N)
            }
        }
    }

    fn has_symbol() -> bool {
        U::has_symbol()
    }
}

impl<U: Unit, const N: i32> Unit for Root<U, N> {
    const FACTOR: ConversionFactor = U::FACTOR.root(N);
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        U::fmt_symbol(f)?;
        write!(f, "^(1/{})", N)
    }

    fn fmt_name(f: &mut Formatter<'_>) -> fmt::Result {
        if N == 2 {
            f.write_str("square root of ")?;
        } else {
            write!(f, "root {} of ", N)?;
        }
        U::fmt_name(f)
    }

    fn has_symbol() -> bool {
        U::has_symbol()
    }
}

impl<A: Unit, B: Unit> ReferenceUnit for Prod<A, B> {}
impl<N: Unit, D: Unit> ReferenceUnit for Per<N, D> {}
impl<U: Unit> ReferenceUnit for Inv<U> {}
impl<U: Unit, const N: i32> ReferenceUnit for Pow<U, N> {}
impl<U: Unit, const N: i32> ReferenceUnit for Root<U, N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Attometer, Femtometer, Foot, Kilometer, Meter};
    use crate::time::{Hour, Second};
    use crate::unit::{Name, Symbol, Unitless};
    use crate::{Dimension, Rational};

    #[test]
    fn factors_follow_the_algebra() {
        assert!(<Per<Kilometer, Hour>>::FACTOR.dimension().equals(&Dimension::VELOCITY));
        assert_eq!(<Per<Kilometer, Hour>>::FACTOR.scale(), Rational::new(5, 18));
        assert_eq!(<Pow<Foot, 2>>::FACTOR.scale(), Rational::new(145_161, 1_562_500));
        assert!(<Root<Pow<Foot, 2>, 2>>::FACTOR.equals(&Foot::FACTOR));
        assert!(<Prod<Meter, Inv<Meter>>>::FACTOR.equals(&Unitless::FACTOR));
    }

    #[test]
    fn root_of_a_tiny_scale_is_not_zero() {
        type GeometricMean = Root<Prod<Femtometer, Attometer>, 2>;
        let scale = GeometricMean::FACTOR.scale();
        assert!(scale.numer() > 0);
        let m = crate::Quantity::<GeometricMean>::new(1.0).to::<Meter>().value();
        let expected = 1e-33f64.sqrt();
        assert!((m - expected).abs() <= expected * 1e-9);
    }

    #[test]
    fn products_are_associative_and_commutative() {
        type Left = Prod<Prod<Foot, Second>, Kilometer>;
        type Right = Prod<Foot, Prod<Second, Kilometer>>;
        assert!(Left::FACTOR.equals(&Right::FACTOR));
        assert!(<Prod<Foot, Second>>::FACTOR.equals(&<Prod<Second, Foot>>::FACTOR));
    }

    #[test]
    fn symbols() {
        assert_eq!(Symbol::<Per<Meter, Second>>::of().to_string(), "m/s");
        assert_eq!(Symbol::<Prod<Meter, Second>>::of().to_string(), "m·s");
        assert_eq!(Symbol::<Inv<Second>>::of().to_string(), "1/s");
        assert_eq!(Symbol::<Pow<Meter, 3>>::of().to_string(), "m^3");
        assert_eq!(Symbol::<Root<Meter, 2>>::of().to_string(), "m^(1/2)");
        assert_eq!(Symbol::<Per<Unitless, Second>>::of().to_string(), "1/s");
        assert!(!<Per<Unitless, Unitless>>::has_symbol());
    }

    #[test]
    fn names() {
        assert_eq!(Name::<Per<Kilometer, Hour>>::of().to_string(), "kilometre per hour");
        assert_eq!(Name::<Pow<Meter, 2>>::of().to_string(), "square metre");
        assert_eq!(Name::<Pow<Meter, 3>>::of().to_string(), "cubic metre");
        assert_eq!(Name::<Pow<Meter, 4>>::of().to_string(), "metre to the power 4");
        assert_eq!(Name::<Root<Meter, 2>>::of().to_string(), "square root of metre");
    }
}
