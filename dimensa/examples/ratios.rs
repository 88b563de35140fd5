//! Derived-unit example: ratios, `Simplify` and decibel ratios.

use dimensa::unitless::{Decibels, Ratio};
use dimensa::{Kilometers, Meters, Seconds, Simplify, Unitless};

fn main() {
    let half = Meters::new(1.0) / Meters::new(2.0);
    let unitless: Ratio = half.simplify();
    assert!((unitless.value() - 0.5).abs() < 1e-12);

    // Ratios of different units of one dimension are converted, not simplified.
    let k = (Kilometers::new(1.0) / Meters::new(1.0)).to::<Unitless>();
    assert!((k.value() - 1000.0).abs() < 1e-9);

    let rate = Meters::new(6.0) / Seconds::new(2.0);
    let back: Meters = (rate * Seconds::new(4.0)).simplify();
    assert_eq!(back.value(), 12.0);

    let gain = Decibels::from_ratio(k.value());
    assert!((gain.value() - 30.0).abs() < 1e-9);
    println!("1 km / 1 m = {k} = {gain}");
}
