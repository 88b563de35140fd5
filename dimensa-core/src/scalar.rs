//! Numeric storage types for quantities.

use core::fmt::Debug;
use num_traits::{AsPrimitive, Float};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point type a [`Quantity`](crate::Quantity) can store.
///
/// Conversion factors are computed once as `f64` at compile time and narrowed with [`Scalar::from_f64`], so an
/// `f32` quantity costs one `f32` multiply-add per conversion.
///
/// This trait is sealed; it is implemented for `f32` and `f64`.
pub trait Scalar: Float + AsPrimitive<f64> + Debug + Default + Send + Sync + sealed::Sealed + 'static {
    /// Narrowing (or identity) cast from `f64`.
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}
