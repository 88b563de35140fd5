//! Dimension vectors.
//!
//! A [`Dimension`] is the list of rational exponents a quantity carries over the eight base dimensions. Two units can
//! be converted into one another exactly when their vectors are equal; multiplying or dividing quantities adds or
//! subtracts the vectors, and powers/roots scale them.
//!
//! ```rust
//! use dimensa_core::{BaseDimension, Dimension, Rational};
//!
//! const SPEED: Dimension = Dimension::LENGTH.div(Dimension::TIME);
//! assert!(SPEED.equals(&Dimension::VELOCITY));
//! assert_eq!(SPEED.exponent(BaseDimension::Time), Rational::integer(-1));
//! ```

use crate::ratio::Rational;
use core::fmt;

/// Number of base dimensions tracked by a [`Dimension`].
pub const BASE_DIMENSIONS: usize = 8;

/// One slot of a [`Dimension`] vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Length (metre).
    Length,
    /// Mass (kilogram).
    Mass,
    /// Time (second).
    Time,
    /// Plane angle (radian). Kept as its own slot so angles and plain numbers stay distinct.
    Angle,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Amount of substance (mole).
    Substance,
    /// Luminous intensity (candela).
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions, in vector order.
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Angle,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Substance,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this slot in a [`Dimension`] vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the canonical unit of this base dimension.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Angle => "rad",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Substance => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }
}

/// Rational exponents over the [`BaseDimension`]s.
///
/// Equality is element-wise; the all-zero vector is [`Dimension::DIMENSIONLESS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimension([Rational; BASE_DIMENSIONS]);

impl Dimension {
    /// Every exponent zero.
    pub const DIMENSIONLESS: Dimension = Dimension([Rational::ZERO; BASE_DIMENSIONS]);

    /// `m`
    pub const LENGTH: Dimension = Dimension::base(BaseDimension::Length);
    /// `kg`
    pub const MASS: Dimension = Dimension::base(BaseDimension::Mass);
    /// `s`
    pub const TIME: Dimension = Dimension::base(BaseDimension::Time);
    /// `rad`
    pub const ANGLE: Dimension = Dimension::base(BaseDimension::Angle);
    /// `A`
    pub const CURRENT: Dimension = Dimension::base(BaseDimension::Current);
    /// `K`
    pub const TEMPERATURE: Dimension = Dimension::base(BaseDimension::Temperature);
    /// `mol`
    pub const SUBSTANCE: Dimension = Dimension::base(BaseDimension::Substance);
    /// `cd`
    pub const LUMINOUS_INTENSITY: Dimension = Dimension::base(BaseDimension::LuminousIntensity);

    /// `m^2`
    pub const AREA: Dimension = Dimension::LENGTH.powi(2);
    /// `m^3`
    pub const VOLUME: Dimension = Dimension::LENGTH.powi(3);
    /// `s^-1`
    pub const FREQUENCY: Dimension = Dimension::TIME.recip();
    /// `m·s^-1`
    pub const VELOCITY: Dimension = Dimension::LENGTH.div(Dimension::TIME);
    /// `m·s^-2`
    pub const ACCELERATION: Dimension = Dimension::VELOCITY.div(Dimension::TIME);
    /// `rad·s^-1`
    pub const ANGULAR_VELOCITY: Dimension = Dimension::ANGLE.div(Dimension::TIME);
    /// `rad^2`
    pub const SOLID_ANGLE: Dimension = Dimension::ANGLE.powi(2);
    /// `m·kg·s^-2`
    pub const FORCE: Dimension = Dimension::MASS.mul(Dimension::ACCELERATION);
    /// `m^2·kg·s^-2`
    pub const ENERGY: Dimension = Dimension::FORCE.mul(Dimension::LENGTH);
    /// `m^2·kg·s^-3`
    pub const POWER: Dimension = Dimension::ENERGY.div(Dimension::TIME);
    /// `m^-1·kg·s^-2`
    pub const PRESSURE: Dimension = Dimension::FORCE.div(Dimension::AREA);
    /// `s·A`
    pub const CHARGE: Dimension = Dimension::CURRENT.mul(Dimension::TIME);
    /// `m^2·kg·s^-3·A^-1`
    pub const VOLTAGE: Dimension = Dimension::POWER.div(Dimension::CURRENT);

    /// Builds a vector from explicit exponents.
    #[inline]
    pub const fn new(exponents: [Rational; BASE_DIMENSIONS]) -> Dimension {
        Dimension(exponents)
    }

    /// Builds a vector from integer exponents.
    pub const fn from_powers(powers: [i32; BASE_DIMENSIONS]) -> Dimension {
        let mut out = [Rational::ZERO; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = Rational::integer(powers[i] as i128);
            i += 1;
        }
        Dimension(out)
    }

    /// Exponent one on `base`, zero elsewhere.
    pub const fn base(base: BaseDimension) -> Dimension {
        let mut out = [Rational::ZERO; BASE_DIMENSIONS];
        out[base.index()] = Rational::ONE;
        Dimension(out)
    }

    /// Exponent of one base dimension.
    #[inline]
    pub const fn exponent(&self, base: BaseDimension) -> Rational {
        self.0[base.index()]
    }

    /// All exponents, in [`BaseDimension::ALL`] order.
    #[inline]
    pub const fn exponents(&self) -> &[Rational; BASE_DIMENSIONS] {
        &self.0
    }

    /// Product of two dimensions (exponents add).
    pub const fn mul(self, rhs: Dimension) -> Dimension {
        let mut out = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = out[i].add(rhs.0[i]);
            i += 1;
        }
        Dimension(out)
    }

    /// Quotient of two dimensions (exponents subtract).
    pub const fn div(self, rhs: Dimension) -> Dimension {
        self.mul(rhs.recip())
    }

    /// Inverse dimension (exponents negate).
    pub const fn recip(self) -> Dimension {
        let mut out = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = out[i].neg();
            i += 1;
        }
        Dimension(out)
    }

    /// Integer power (exponents scale by `n`).
    pub const fn powi(self, n: i32) -> Dimension {
        let factor = Rational::integer(n as i128);
        let mut out = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = out[i].mul(factor);
            i += 1;
        }
        Dimension(out)
    }

    /// `n`-th root (exponents divide by `n`, producing rational exponents when needed).
    ///
    /// # Panics
    ///
    /// Panics for `n == 0`.
    pub const fn root(self, n: i32) -> Dimension {
        assert!(n != 0, "zeroth root of a dimension");
        let divisor = Rational::integer(n as i128);
        let mut out = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = out[i].div(divisor);
            i += 1;
        }
        Dimension(out)
    }

    /// Const element-wise equality.
    pub const fn equals(&self, other: &Dimension) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if !self.0[i].equals(&other.0[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Dimension::DIMENSIONLESS)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::DIMENSIONLESS
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for base in BaseDimension::ALL {
            let exp = self.exponent(base);
            if exp.is_zero() {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if exp.is_integer() {
                if exp != Rational::ONE {
                    write!(f, "^{}", exp)?;
                }
            } else {
                write!(f, "^({})", exp)?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}
