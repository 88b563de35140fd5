//! Exact rational arithmetic usable in `const` contexts.
//!
//! Every unit conversion factor in this crate is built from [`Rational`] values at compile time. The arithmetic is
//! exact as long as numerators and denominators stay within `i128`; an operation whose result does not fit panics
//! (and therefore fails the build when evaluated inside an associated `const`, which is where unit algebra runs).
//! Nothing ever wraps silently.
//!
//! ```rust
//! use dimensa_core::Rational;
//!
//! const FOOT: Rational = Rational::new(381, 1250);
//! const SQUARE_FOOT: Rational = FOOT.powi(2);
//! assert_eq!(SQUARE_FOOT, Rational::new(145_161, 1_562_500));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Upper bound on Newton steps, and separately on continued-fraction terms, spent by every root approximation.
pub const ROOT_MAX_ITERATIONS: u32 = 64;

/// Relative error at which an irrational root is accepted as a rational approximation.
pub const ROOT_TOLERANCE: f64 = 1e-10;

/// Largest numerator/denominator produced by the continued-fraction rationalisation.
///
/// Beyond 2^53 an `f64` carries no further information, and staying small leaves headroom for later products.
const ROOT_TERM_LIMIT: i128 = 1 << 53;

/// A reduced fraction `num / den` with `den > 0`.
///
/// # Invariants
///
/// - `gcd(|num|, den) == 1`
/// - `den > 0`
/// - zero is always stored as `0 / 1`
///
/// Because the representation is canonical, structural equality (`==`) is numeric equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i128,
    den: i128,
}

#[inline]
const fn unwrap_i128(value: Option<i128>) -> i128 {
    match value {
        Some(v) => v,
        None => panic!("rational overflow: value does not fit in i128"),
    }
}

const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = unwrap_i128(a.checked_abs());
    let mut b = unwrap_i128(b.checked_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Exact integer `n`-th root of a non-negative integer, if there is one.
const fn exact_int_root(x: i128, n: u32) -> Option<i128> {
    if x < 2 || n == 1 {
        return Some(x);
    }
    let mut lo: i128 = 1;
    let mut hi: i128 = if n >= 127 { 2 } else { 1i128 << (127 / n + 1) };
    if hi > x {
        hi = x;
    }
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match mid.checked_pow(n) {
            Some(p) if p == x => return Some(mid),
            Some(p) if p < x => lo = mid + 1,
            _ => hi = mid - 1,
        }
    }
    None
}

#[inline]
pub(crate) const fn powi_f64(x: f64, n: u32) -> f64 {
    let mut acc = 1.0;
    let mut i = 0;
    while i < n {
        acc *= x;
        i += 1;
    }
    acc
}

/// Newton iteration for `t^(1/n)` with `t > 0`, evaluable at compile time.
///
/// Starts from a power of two above the root so the iteration decreases monotonically; it stops at the first
/// step that makes no progress or after [`ROOT_MAX_ITERATIONS`] steps.
pub(crate) const fn nth_root_f64(t: f64, n: u32) -> f64 {
    if t == 0.0 || n == 1 {
        return t;
    }
    if t < 1.0 {
        return 1.0 / nth_root_f64(1.0 / t, n);
    }

    let mut bits: u32 = 0;
    let mut bound = 1.0;
    while bound < t {
        bound *= 2.0;
        bits += 1;
    }
    let mut x = powi_f64(2.0, bits.div_ceil(n));

    let mut i = 0;
    while i < ROOT_MAX_ITERATIONS {
        let next = ((n - 1) as f64 * x + t / powi_f64(x, n - 1)) / n as f64;
        if next >= x {
            break;
        }
        x = next;
        i += 1;
    }
    x
}

#[inline]
const fn within_tolerance(approx: f64, target: f64) -> bool {
    let diff = approx - target;
    let diff = if diff < 0.0 { -diff } else { diff };
    diff <= ROOT_TOLERANCE * target
}

/// Best continued-fraction convergent of a positive `x` within [`ROOT_TOLERANCE`].
///
/// Values below one are expanded through their reciprocal, so the leading term is never a truncated zero.
const fn rationalize(x: f64) -> Rational {
    if x < 1.0 {
        return rationalize(1.0 / x).recip();
    }
    let a0 = x as i128;
    let (mut h_prev, mut h) = (1i128, a0);
    let (mut k_prev, mut k) = (0i128, 1i128);
    let mut frac = x - a0 as f64;

    let mut i = 0;
    while i < ROOT_MAX_ITERATIONS {
        if frac <= 0.0 || within_tolerance(h as f64 / k as f64, x) {
            break;
        }
        let inv = 1.0 / frac;
        let a = inv as i128;
        frac = inv - a as f64;

        let h_next = match a.checked_mul(h) {
            Some(v) => v + h_prev,
            None => break,
        };
        let k_next = match a.checked_mul(k) {
            Some(v) => v + k_prev,
            None => break,
        };
        if h_next > ROOT_TERM_LIMIT || k_next > ROOT_TERM_LIMIT {
            break;
        }
        h_prev = h;
        h = h_next;
        k_prev = k;
        k = k_next;
        i += 1;
    }
    Rational::new(h, k)
}

impl Rational {
    /// `0 / 1`.
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    /// `1 / 1`.
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Builds a reduced rational.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0`.
    ///
    /// ```rust
    /// use dimensa_core::Rational;
    /// let r = Rational::new(10, -4);
    /// assert_eq!((r.numer(), r.denom()), (-5, 2));
    /// ```
    pub const fn new(num: i128, den: i128) -> Rational {
        assert!(den != 0, "rational with zero denominator");
        if num == 0 {
            return Rational::ZERO;
        }
        let g = gcd(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = unwrap_i128(num.checked_neg());
            den = unwrap_i128(den.checked_neg());
        }
        Rational { num, den }
    }

    /// Integer `n / 1`.
    #[inline]
    pub const fn integer(n: i128) -> Rational {
        Rational { num: n, den: 1 }
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn numer(&self) -> i128 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn denom(&self) -> i128 {
        self.den
    }

    /// `true` for `0 / 1`.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// `true` when the denominator is one.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Const equality (the derived `PartialEq` is not callable in `const fn`).
    #[inline]
    pub const fn equals(&self, other: &Rational) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// Const three-way comparison.
    pub const fn compare(&self, other: &Rational) -> Ordering {
        let lhs = unwrap_i128(self.num.checked_mul(other.den));
        let rhs = unwrap_i128(other.num.checked_mul(self.den));
        if lhs < rhs {
            Ordering::Less
        } else if lhs > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Exact sum.
    pub const fn add(self, rhs: Rational) -> Rational {
        let g = gcd(self.den, rhs.den);
        let left = unwrap_i128(self.num.checked_mul(rhs.den / g));
        let right = unwrap_i128(rhs.num.checked_mul(self.den / g));
        let den = unwrap_i128((self.den / g).checked_mul(rhs.den));
        Rational::new(unwrap_i128(left.checked_add(right)), den)
    }

    /// Exact difference.
    #[inline]
    pub const fn sub(self, rhs: Rational) -> Rational {
        self.add(rhs.neg())
    }

    /// Exact product; operands are cross-reduced first to postpone overflow.
    pub const fn mul(self, rhs: Rational) -> Rational {
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        if g1 == 0 || g2 == 0 {
            return Rational::ZERO;
        }
        let num = unwrap_i128((self.num / g1).checked_mul(rhs.num / g2));
        let den = unwrap_i128((self.den / g2).checked_mul(rhs.den / g1));
        Rational::new(num, den)
    }

    /// Exact quotient.
    ///
    /// # Panics
    ///
    /// Panics when dividing by zero.
    #[inline]
    pub const fn div(self, rhs: Rational) -> Rational {
        self.mul(rhs.recip())
    }

    /// Additive inverse.
    #[inline]
    pub const fn neg(self) -> Rational {
        Rational {
            num: unwrap_i128(self.num.checked_neg()),
            den: self.den,
        }
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics on zero.
    pub const fn recip(self) -> Rational {
        assert!(self.num != 0, "reciprocal of a zero rational");
        Rational::new(self.den, self.num)
    }

    /// Absolute value.
    #[inline]
    pub const fn abs(self) -> Rational {
        if self.num < 0 {
            self.neg()
        } else {
            self
        }
    }

    /// Integer power, negative exponents allowed (`0^-n` panics).
    pub const fn powi(self, exp: i32) -> Rational {
        if exp < 0 {
            return self.recip().powi(-exp);
        }
        let mut base = self;
        let mut exp = exp as u32;
        let mut acc = Rational::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.mul(base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(base);
            }
        }
        acc
    }

    /// Best rational approximation of `sqrt(self)`; exact for squares of rationals.
    ///
    /// ```rust
    /// use dimensa_core::Rational;
    ///
    /// assert_eq!(Rational::new(9, 4).sqrt_approx(), Rational::new(3, 2));
    ///
    /// let root2 = Rational::integer(2).sqrt_approx();
    /// assert!((root2.to_f64() - core::f64::consts::SQRT_2).abs() < 5e-9);
    /// ```
    #[inline]
    pub const fn sqrt_approx(self) -> Rational {
        self.root_approx(2)
    }

    /// Best rational approximation of the `n`-th root.
    ///
    /// When numerator and denominator are both perfect `n`-th powers the result is exact. Otherwise the root is
    /// refined by Newton iteration and rationalised by continued fractions, each bounded by
    /// [`ROOT_MAX_ITERATIONS`] and accepted at [`ROOT_TOLERANCE`] relative error.
    ///
    /// # Panics
    ///
    /// Panics for `n == 0` and for even roots of negative values.
    pub const fn root_approx(self, n: u32) -> Rational {
        assert!(n > 0, "zeroth root is undefined");
        if n == 1 || self.num == 0 {
            return self;
        }
        let negative = self.num < 0;
        assert!(!(negative && n % 2 == 0), "even root of a negative rational");

        let magnitude = unwrap_i128(self.num.checked_abs());
        let root = match (exact_int_root(magnitude, n), exact_int_root(self.den, n)) {
            (Some(p), Some(q)) => Rational::new(p, q),
            _ => rationalize(nth_root_f64(magnitude as f64 / self.den as f64, n)),
        };
        if negative {
            root.neg()
        } else {
            root
        }
    }

    /// Nearest `f64`.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::integer(value as i128)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational::integer(value as i128)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        Rational::add(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        Rational::sub(self, rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        Rational::mul(self, rhs)
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        Rational::div(self, rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational::neg(self)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and normalisation
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_reduces_and_normalises_sign() {
        let r = Rational::new(6, -8);
        assert_eq!(r.numer(), -3);
        assert_eq!(r.denom(), 4);
        assert_eq!(Rational::new(0, -7), Rational::ZERO);
        assert_eq!(Rational::new(-4, -2), Rational::integer(2));
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn zero_denominator_panics() {
        let _ = Rational::new(1, 0);
    }

    #[test]
    fn const_evaluation() {
        const R: Rational = Rational::new(1, 3).add(Rational::new(1, 6));
        assert_eq!(R, Rational::new(1, 2));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn arithmetic_is_exact() {
        let a = Rational::new(381, 1250);
        let b = Rational::new(1, 12);
        assert_eq!(a * b, Rational::new(127, 5000));
        assert_eq!(a / a, Rational::ONE);
        assert_eq!(a - a, Rational::ZERO);
        assert_eq!(Rational::new(1, 2) + Rational::new(1, 3), Rational::new(5, 6));
        assert_eq!(-Rational::new(1, 2), Rational::new(-1, 2));
    }

    #[test]
    fn powers() {
        assert_eq!(Rational::new(2, 3).powi(3), Rational::new(8, 27));
        assert_eq!(Rational::new(2, 3).powi(-2), Rational::new(9, 4));
        assert_eq!(Rational::new(5, 7).powi(0), Rational::ONE);
        assert_eq!(Rational::integer(10).powi(24), Rational::integer(10i128.pow(24)));
    }

    #[test]
    #[should_panic(expected = "rational overflow")]
    fn overflow_panics_instead_of_wrapping() {
        let _ = Rational::integer(10).powi(40);
    }

    #[test]
    #[should_panic(expected = "reciprocal of a zero")]
    fn division_by_zero_panics() {
        let _ = Rational::ONE / Rational::ZERO;
    }

    #[test]
    fn ordering() {
        assert!(Rational::new(1, 3) < Rational::new(1, 2));
        assert!(Rational::new(-1, 2) < Rational::ZERO);
        assert_eq!(Rational::new(2, 4).cmp(&Rational::new(1, 2)), Ordering::Equal);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rational::new(3, 1)), "3");
        assert_eq!(format!("{}", Rational::new(-3, 9)), "-1/3");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Roots
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn sqrt_of_perfect_squares_is_exact() {
        assert_eq!(Rational::integer(4).sqrt_approx(), Rational::integer(2));
        assert_eq!(Rational::integer(100).sqrt_approx(), Rational::integer(10));
        assert_eq!(Rational::integer(10_000).sqrt_approx(), Rational::integer(100));
        assert_eq!(Rational::new(145_161, 1_562_500).sqrt_approx(), Rational::new(381, 1250));
    }

    #[test]
    fn sqrt_of_non_squares_is_close() {
        for n in [2i128, 10, 30, 61, 1000] {
            let approx = Rational::integer(n).sqrt_approx().to_f64();
            assert!((approx - (n as f64).sqrt()).abs() < 5e-9, "sqrt({n}) ~ {approx}");
        }
    }

    #[test]
    fn sqrt_of_small_fraction() {
        let approx = Rational::new(1, 1_000_000_007).sqrt_approx().to_f64();
        let expected = (1.0f64 / 1_000_000_007.0).sqrt();
        assert!((approx - expected).abs() <= expected * 1e-9);
    }

    #[test]
    fn sqrt_below_f64_epsilon_stays_nonzero() {
        let tiny = Rational::new(1, 10i128.pow(33));
        let approx = tiny.sqrt_approx();
        assert!(approx.numer() > 0);
        let expected = 1e-33f64.sqrt();
        assert!((approx.to_f64() - expected).abs() <= expected * 1e-9);

        let cube = Rational::new(2, 10i128.pow(36)).root_approx(3).to_f64();
        let expected = (2e-36f64).cbrt();
        assert!((cube - expected).abs() <= expected * 1e-9);
    }

    #[test]
    fn cube_roots() {
        assert_eq!(Rational::new(-27, 8).root_approx(3), Rational::new(-3, 2));
        let approx = Rational::integer(2).root_approx(3).to_f64();
        assert!((approx - 2f64.cbrt()).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "even root of a negative")]
    fn even_root_of_negative_panics() {
        let _ = Rational::integer(-4).sqrt_approx();
    }

    #[test]
    fn nth_root_f64_matches_std() {
        assert!((nth_root_f64(2.0, 2) - 2f64.sqrt()).abs() < 1e-15);
        assert!((nth_root_f64(1e30, 3) - 1e10).abs() < 1e-4);
        assert!((nth_root_f64(1e-12, 2) - 1e-6).abs() < 1e-20);
    }

    proptest! {
        #[test]
        fn prop_add_sub_roundtrip(a in -10_000i64..10_000, b in 1i64..10_000, c in -10_000i64..10_000, d in 1i64..10_000) {
            let x = Rational::new(a as i128, b as i128);
            let y = Rational::new(c as i128, d as i128);
            prop_assert_eq!(x + y - y, x);
        }

        #[test]
        fn prop_mul_commutes(a in -10_000i64..10_000, b in 1i64..10_000, c in -10_000i64..10_000, d in 1i64..10_000) {
            let x = Rational::new(a as i128, b as i128);
            let y = Rational::new(c as i128, d as i128);
            prop_assert_eq!(x * y, y * x);
        }

        #[test]
        fn prop_square_then_root_is_identity(a in 1i64..100_000, b in 1i64..100_000) {
            let x = Rational::new(a as i128, b as i128);
            prop_assert_eq!(x.powi(2).sqrt_approx(), x);
        }
    }
}
