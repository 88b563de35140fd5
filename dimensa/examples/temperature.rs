//! Affine temperature scales and temperatures inside compound units.

use dimensa::energy::Joule;
use dimensa::{Celsius, DegreesCelsius, DegreesFahrenheit, Fahrenheit, Kelvin, Kelvins, Per, Quantity};

fn main() {
    let body = DegreesFahrenheit::new(98.6).to::<Celsius>();
    assert!((body.value() - 37.0).abs() < 1e-9);

    let zero: Kelvins = DegreesCelsius::new(-273.15).into();
    assert!(zero.value().abs() < 1e-9);

    for c in [-40.0, 0.0, 37.0, 100.0] {
        let reading = DegreesCelsius::new(c);
        println!("{reading} = {:.2} = {:.2}", reading.to::<Fahrenheit>(), reading.to::<Kelvin>());
    }

    // Heat capacity only uses the scale of the temperature unit.
    let water: Quantity<Per<Joule, Celsius>> = Quantity::new(4184.0);
    let per_f = water.to::<Per<Joule, Fahrenheit>>();
    assert!((per_f.value() - 4184.0 * 5.0 / 9.0).abs() < 1e-9);
    println!("water: {water} = {per_f:.1}");
}
