//! Decibel levels: referenced power, gains and the round trip through watts.
//!
//! Run with: cargo run --example decibels

use dimensa::unitless::Decibels;
use dimensa::{DecibelMilliwatts, DecibelWatts, Linear, Milliwatt, Watt, Watts};

fn main() {
    let transmitter = DecibelWatts::new(23.1);
    let watts = transmitter.to_scale::<Watt, Linear>();
    println!("{transmitter} is {watts:.3}");
    assert!((watts.value() - 204.173_794).abs() < 1e-6);

    let dbm: DecibelMilliwatts = transmitter.to::<Milliwatt>();
    println!("{transmitter} is {dbm:.1}");
    assert!((dbm.value() - 53.1).abs() < 1e-9);

    // A gain applied to a referenced level keeps the reference.
    let amplified = Decibels::new(30.0) + DecibelWatts::new(10.0);
    assert!((amplified.value() - 40.0).abs() < 1e-12);
    let lossy = amplified - Decibels::new(3.0);
    println!("+30 dB then -3 dB: {lossy}");

    // The difference of two levels is a plain ratio.
    let margin: Decibels = DecibelWatts::new(10.0) - DecibelMilliwatts::new(30.0);
    println!("10 dBW over 30 dBm: {margin} (x{:.1})", margin.ratio());

    let level: DecibelWatts = Watts::new(100.0).into();
    assert!((level.value() - 20.0).abs() < 1e-12);
}
