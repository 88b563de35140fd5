//! Angles: exact conversions among degree-based units, trig in any unit, and inverse trig back to radians.

use dimensa::unitless::Ratio;
use dimensa::{math, Arcseconds, Degree, Degrees, Gradians, HourAngles, Meters, Turns};

fn main() {
    let arcsec: Arcseconds = Degrees::new(1.0).to();
    assert_eq!(arcsec.value(), 3600.0);

    let right: Gradians = Turns::new(0.25).to();
    println!("a quarter turn is {right}");
    assert_eq!(right.value(), 100.0);

    let ra: Degrees = HourAngles::new(6.752_5).to();
    println!("6.7525 h of right ascension is {ra:.4}");
    assert!((ra.value() - 101.2875).abs() < 1e-9);

    let (sin, cos) = Degrees::new(30.0).sin_cos();
    assert!((sin - 0.5).abs() < 1e-12);
    assert!((cos - 3f64.sqrt() / 2.0).abs() < 1e-12);

    let elevation = math::atan2(Meters::new(1.0), Meters::new(3f64.sqrt())).to::<Degree>();
    println!("a 1 in √3 slope rises at {elevation:.2}");
    assert!((elevation.value() - 30.0).abs() < 1e-12);

    let back = math::asin(Ratio::new(sin)).to::<Degree>();
    assert!((back.value() - 30.0).abs() < 1e-12);
}
