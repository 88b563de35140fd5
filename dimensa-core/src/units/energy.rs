//! Energy units.
//!
//! The canonical unit is the [`Joule`] (`kg·m²·s⁻²`). The calorie is the thermochemical one (`4.184 J`), the
//! electronvolt uses the exact 2019 SI elementary charge and the British thermal unit is the IT definition.
//!
//! ```rust
//! use dimensa_core::energy::{KilowattHours, Megajoule};
//!
//! let e = KilowattHours::new(1.0).to::<Megajoule>();
//! assert!((e.value() - 3.6).abs() < 1e-12);
//! ```

use crate::Unit;
use dimensa_derive::Unit;

/// Marker trait for the units declared in this module.
pub trait EnergyUnit: Unit {}

include!(concat!(env!("OUT_DIR"), "/energy.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::Newtons;
    use crate::length::Meters;
    use crate::power::{Watt, Watts};
    use crate::time::{Hours, Seconds};
    use crate::Dimension;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn joule_is_newton_metre() {
        assert_eq!(Joule::FACTOR.dimension(), Dimension::ENERGY);
        let work = Newtons::new(10.0) * Meters::new(3.0);
        assert_abs_diff_eq!(work.to::<Joule>().value(), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn power_times_time() {
        let e = Watts::new(1000.0) * Hours::new(1.0);
        assert_abs_diff_eq!(e.to::<KilowattHour>().value(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.to::<WattHour>().value(), 1000.0, epsilon = 1e-9);
        let p = Joules::new(60.0) / Seconds::new(2.0);
        assert_abs_diff_eq!(p.to::<Watt>().value(), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn calories_and_small_units() {
        assert_abs_diff_eq!(Kilocalories::new(1.0).to::<Calorie>().value(), 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Calories::new(1.0).to::<Joule>().value(), 4.184, epsilon = 1e-12);
        assert_abs_diff_eq!(Ergs::new(1e7).to::<Joule>().value(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            Electronvolts::new(1.0).to::<Joule>().value(),
            1.602_176_634e-19,
            max_relative = 1e-12
        );
        assert_abs_diff_eq!(BritishThermalUnits::new(1.0).to::<Joule>().value(), 1055.055_852_62, epsilon = 1e-9);
    }

    #[test]
    fn prefixed_joules() {
        assert_eq!(Kilojoules::new(4.184).to::<Joule>().value(), 4184.0);
        assert_eq!(Megajoules::new(1.0).abbreviation().to_string(), "MJ");
    }
}
