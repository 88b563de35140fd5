//! Amounts of information.
//!
//! Information is counted in binary digits, so the units here are dimensionless: a [`Bit`] converts to
//! [`Unitless`](crate::Unitless) as `1`, a [`Byte`] as `8`, and a data rate such as [`BitsPerSecond`] has the
//! dimension of a frequency.
//! Both units carry the SI prefixes (`kB = 1000 B`) and the IEC binary prefixes (`KiB = 1024 B`).
//!
//! ```rust
//! use dimensa_core::data::{Bytes, Kibibytes, Kilobytes, Megabit};
//!
//! let page = Kibibytes::new(4.0);
//! let bytes: Bytes = page.into();
//! assert_eq!(bytes.value(), 4096.0);
//! assert!((page.to::<dimensa_core::data::Kilobyte>().value() - 4.096).abs() < 1e-12);
//!
//! let link = Kilobytes::new(125.0).to::<Megabit>();
//! assert!((link.value() - 1.0).abs() < 1e-12);
//! ```

use crate::time::Second;
use crate::{Per, Quantity, Unit};
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait DataUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/data.rs"));

/// Information per unit of time.
pub type DataRate<D, T> = Quantity<Per<D, T>>;

/// Bytes per second.
pub type BytesPerSecond = DataRate<Byte, Second>;
/// Bits per second.
pub type BitsPerSecond = DataRate<Bit, Second>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::is_dimensionless;
    use crate::time::Seconds;
    use crate::Unitless;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn bytes_and_bits_are_counts() {
        assert!(is_dimensionless::<Byte>());
        assert!(is_dimensionless::<Kibibit>());
        assert_eq!(Bytes::new(3.0).to::<Bit>().value(), 24.0);
        assert_eq!(Nibbles::new(2.0).to::<Byte>().value(), 1.0);
        assert_eq!(Bytes::new(2.0).to::<Unitless>().value(), 16.0);
        assert_eq!(Bits::new(5.0).to::<Unitless>().value(), 5.0);
    }

    #[test]
    fn binary_prefixes_are_powers_of_1024() {
        assert_eq!(Kibibytes::new(1.0).to::<Byte>().value(), 1024.0);
        assert_eq!(Bytes::new(2048.0).to::<Kibibyte>().value(), 2.0);
        assert_eq!(Mebibytes::new(1.0).to::<Kibibyte>().value(), 1024.0);
        assert_eq!(Gibibytes::new(1.0).to::<Byte>().value(), 1_073_741_824.0);
        assert_relative_eq!(Exbibytes::new(1.0).to::<Byte>().value(), 2f64.powi(60), max_relative = 1e-15);
        assert_eq!(Kibibits::new(8.0).to::<Kibibyte>().value(), 1.0);
    }

    #[test]
    fn metric_and_binary_prefixes_differ() {
        let disk = Terabytes::new(1.0).to::<Tebibyte>();
        assert_abs_diff_eq!(disk.value(), 0.909_494_701_772_928, epsilon = 1e-15);
        assert_eq!(Kilobytes::new(1.0).to::<Byte>().value(), 1000.0);
    }

    #[test]
    fn prefixed_variants_convert_with_from() {
        let bytes: Bytes = Kibibytes::new(2.0).into();
        assert_eq!(bytes.value(), 2048.0);
        let bits: Bits = Kibibytes::new(1.0).into();
        assert_eq!(bits.value(), 8192.0);
        let back: Mebibytes = Bytes::new(1_048_576.0).into();
        assert_eq!(back.value(), 1.0);
    }

    #[test]
    fn rates_have_the_frequency_dimension() {
        let rate: BitsPerSecond = Megabits::new(100.0).to::<Bit>() / Seconds::new(1.0);
        let bytes: BytesPerSecond = rate.to();
        assert_abs_diff_eq!(bytes.value(), 12_500_000.0, epsilon = 1e-6);
        let hz = rate.to::<crate::frequency::Hertz>();
        assert_abs_diff_eq!(hz.value(), 1e8, epsilon = 1e-3);
    }

    #[test]
    fn symbols() {
        assert_eq!(format!("{}", Kibibytes::new(4.0)), "4 KiB");
        assert_eq!(format!("{}", Megabits::new(1.0)), "1 Mb");
        assert_eq!(Gibibits::new(1.0).abbreviation().to_string(), "Gib");
        assert_eq!(Bytes::new(1.0).abbreviation().to_string(), "B");
    }
}
