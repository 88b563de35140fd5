//! Minimal end-to-end example: convert angles, compute a velocity and hand a time to `std`.

use core::time::Duration;
use dimensa::velocity::Velocity;
use dimensa::{Degrees, Hours, Kilometer, Kilometers, Meters, Minutes, Radian, Second, Seconds};

fn main() {
    let a = Degrees::new(180.0);
    let r = a.to::<Radian>();
    assert!((r.value() - core::f64::consts::PI).abs() < 1e-12);

    let d = Kilometers::new(1_000.0);
    let t = Seconds::new(100.0);
    let v: Velocity<Kilometer, Second> = d / t;
    assert!((v.value() - 10.0).abs() < 1e-12);
    println!("{d} in {t} is {v}");

    // Mixed units add and compare after converting the right-hand side.
    let total = Meters::new(250.0) + Kilometers::new(1.0);
    assert_eq!(total.value(), 1250.0);
    assert!(Kilometers::new(1.0) > Meters::new(999.0));

    let wait = Duration::try_from(Minutes::new(1.5)).unwrap();
    assert_eq!(wait, Duration::from_secs(90));
    let h: Hours = Duration::from_secs(5400).into();
    println!("{wait:?} is {}, 5400 s is {h}", Seconds::from(wait));
}
