//! Conversion factors.
//!
//! A [`ConversionFactor`] says what one unit is worth in canonical base units:
//!
//! ```text
//! 1 unit = scale · π^pi   base units   (+ offset base units, for affine units)
//! ```
//!
//! Every predefined unit stores its factor as an associated `const`, and compound units (`Prod`, `Per`, `Pow`, …)
//! derive theirs through the algebra below, so the whole chain is evaluated by the compiler. The π exponent keeps
//! angle relations (degree/radian, parsec/au) exact instead of approximating π by a fraction.
//!
//! Compound operations always drop the affine offset: `°C · m` is a *temperature interval* times a length.
//!
//! ```rust
//! use dimensa_core::{ConversionFactor, Dimension, Rational};
//!
//! const METER: ConversionFactor = ConversionFactor::base(Dimension::LENGTH);
//! const FOOT: ConversionFactor = METER.scaled(Rational::new(381, 1250));
//!
//! let c = FOOT.conversion_to(&METER);
//! assert!((c.apply(10.0) - 3.048).abs() < 1e-12);
//! ```

use crate::dimension::Dimension;
use crate::ratio::{nth_root_f64, powi_f64, Rational};
use core::f64::consts::PI;
use core::fmt;

/// `π^exp` for a rational exponent, evaluable at compile time.
pub(crate) const fn pi_pow(exp: Rational) -> f64 {
    if exp.is_zero() {
        return 1.0;
    }
    let negative = exp.numer() < 0;
    let magnitude = exp.numer().unsigned_abs();
    let den = exp.denom() as u128;

    let whole = magnitude / den;
    let rem = magnitude % den;

    let mut acc = 1.0;
    let mut i = 0;
    while i < whole {
        acc *= PI;
        i += 1;
    }
    if rem != 0 {
        acc *= nth_root_f64(powi_f64(PI, rem as u32), den as u32);
    }
    if negative {
        1.0 / acc
    } else {
        acc
    }
}

/// Scale, dimension, π exponent and affine offset of a unit relative to the canonical base units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConversionFactor {
    scale: Rational,
    dimension: Dimension,
    pi: Rational,
    offset: Rational,
}

impl ConversionFactor {
    /// Factor of a plain number.
    pub const DIMENSIONLESS: ConversionFactor = ConversionFactor::base(Dimension::DIMENSIONLESS);

    /// Canonical unit of `dimension`: scale one, no π, no offset.
    #[inline]
    pub const fn base(dimension: Dimension) -> ConversionFactor {
        ConversionFactor {
            scale: Rational::ONE,
            dimension,
            pi: Rational::ZERO,
            offset: Rational::ZERO,
        }
    }

    /// Multiplies the scale by `ratio`; dimension, π exponent and offset are kept.
    #[inline]
    pub const fn scaled(self, ratio: Rational) -> ConversionFactor {
        ConversionFactor {
            scale: self.scale.mul(ratio),
            ..self
        }
    }

    /// Multiplies the unit by `π^exp`.
    #[inline]
    pub const fn times_pi(self, exp: Rational) -> ConversionFactor {
        ConversionFactor {
            pi: self.pi.add(exp),
            ..self
        }
    }

    /// Replaces the affine offset (in base units).
    #[inline]
    pub const fn with_offset(self, offset: Rational) -> ConversionFactor {
        ConversionFactor { offset, ..self }
    }

    /// Same factor without its offset, i.e. the interval scale of an affine unit.
    #[inline]
    pub const fn linear(self) -> ConversionFactor {
        self.with_offset(Rational::ZERO)
    }

    /// Rational part of the scale.
    #[inline]
    pub const fn scale(&self) -> Rational {
        self.scale
    }

    /// Dimension vector.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Exponent of π in the scale.
    #[inline]
    pub const fn pi_exponent(&self) -> Rational {
        self.pi
    }

    /// Affine offset in base units.
    #[inline]
    pub const fn offset(&self) -> Rational {
        self.offset
    }

    /// Factor of `self · rhs`.
    pub const fn mul(self, rhs: ConversionFactor) -> ConversionFactor {
        ConversionFactor {
            scale: self.scale.mul(rhs.scale),
            dimension: self.dimension.mul(rhs.dimension),
            pi: self.pi.add(rhs.pi),
            offset: Rational::ZERO,
        }
    }

    /// Factor of `self / rhs`.
    pub const fn div(self, rhs: ConversionFactor) -> ConversionFactor {
        ConversionFactor {
            scale: self.scale.div(rhs.scale),
            dimension: self.dimension.div(rhs.dimension),
            pi: self.pi.sub(rhs.pi),
            offset: Rational::ZERO,
        }
    }

    /// Factor of `1 / self`.
    pub const fn recip(self) -> ConversionFactor {
        ConversionFactor {
            scale: self.scale.recip(),
            dimension: self.dimension.recip(),
            pi: self.pi.neg(),
            offset: Rational::ZERO,
        }
    }

    /// Factor of `self^n`.
    pub const fn powi(self, n: i32) -> ConversionFactor {
        let exp = Rational::integer(n as i128);
        ConversionFactor {
            scale: self.scale.powi(n),
            dimension: self.dimension.powi(n),
            pi: self.pi.mul(exp),
            offset: Rational::ZERO,
        }
    }

    /// Factor of `self^(1/n)`.
    ///
    /// The scale is exact when it is a perfect `n`-th power and otherwise approximated by
    /// [`Rational::root_approx`].
    ///
    /// # Panics
    ///
    /// Panics for `n <= 0` and for even roots of a negative scale.
    pub const fn root(self, n: i32) -> ConversionFactor {
        assert!(n > 0, "root index must be positive");
        ConversionFactor {
            scale: self.scale.root_approx(n as u32),
            dimension: self.dimension.root(n),
            pi: self.pi.div(Rational::integer(n as i128)),
            offset: Rational::ZERO,
        }
    }

    /// `true` when both factors share a dimension.
    #[inline]
    pub const fn is_convertible(&self, other: &ConversionFactor) -> bool {
        self.dimension.equals(&other.dimension)
    }

    /// `true` when the dimension vector is all zeros.
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Const structural equality.
    pub const fn equals(&self, other: &ConversionFactor) -> bool {
        self.scale.equals(&other.scale)
            && self.dimension.equals(&other.dimension)
            && self.pi.equals(&other.pi)
            && self.offset.equals(&other.offset)
    }

    /// Size of one unit in base units, as `f64` (`scale · π^pi`).
    #[inline]
    pub const fn multiplier(&self) -> f64 {
        self.scale.to_f64() * pi_pow(self.pi)
    }

    /// The affine map taking a value in `self` to a value in `to`.
    ///
    /// The multiplier and the offset are reduced exactly as rationals before the single rounding to `f64`.
    /// Dimensions are not checked here; see [`convert`].
    pub const fn conversion_to(&self, to: &ConversionFactor) -> Conversion {
        let multiplier = self.scale.div(to.scale).to_f64() * pi_pow(self.pi.sub(to.pi));
        let offset = if self.offset.equals(&to.offset) {
            0.0
        } else {
            self.offset.sub(to.offset).div(to.scale).to_f64() / pi_pow(to.pi)
        };
        Conversion { multiplier, offset }
    }
}

impl fmt::Display for ConversionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scale)?;
        if !self.pi.is_zero() {
            if self.pi == Rational::ONE {
                f.write_str("·π")?;
            } else {
                write!(f, "·π^({})", self.pi)?;
            }
        }
        if !self.dimension.is_dimensionless() {
            write!(f, " {}", self.dimension)?;
        }
        if !self.offset.is_zero() {
            write!(f, " + {}", self.offset)?;
        }
        Ok(())
    }
}

/// An affine map `x ↦ multiplier · x + offset` between two units of the same dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    /// Linear coefficient.
    pub multiplier: f64,
    /// Additive term, in target units.
    pub offset: f64,
}

impl Conversion {
    /// The map that leaves values untouched.
    pub const IDENTITY: Conversion = Conversion {
        multiplier: 1.0,
        offset: 0.0,
    };

    /// Applies the map to an `f64`.
    #[inline]
    pub const fn apply(&self, value: f64) -> f64 {
        value * self.multiplier + self.offset
    }
}

/// Converts `value` from one factor to another.
///
/// Equal factors return `value` untouched. Generic code never calls this with mismatched dimensions (quantity
/// conversions check dimensions at compile time); a direct call with incompatible factors panics.
///
/// ```rust
/// use dimensa_core::{convert, ConversionFactor, Dimension, Rational};
///
/// const KELVIN: ConversionFactor = ConversionFactor::base(Dimension::TEMPERATURE);
/// const CELSIUS: ConversionFactor = KELVIN.with_offset(Rational::new(5463, 20));
///
/// assert!((convert(0.0, &CELSIUS, &KELVIN) - 273.15).abs() < 1e-9);
/// ```
pub const fn convert(value: f64, from: &ConversionFactor, to: &ConversionFactor) -> f64 {
    assert!(
        from.is_convertible(to),
        "cannot convert between units of different dimensions"
    );
    if from.equals(to) {
        return value;
    }
    from.conversion_to(to).apply(value)
}
