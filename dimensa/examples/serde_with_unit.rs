//! Per-field unit tagging with `dimensa::serde_with_unit`.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use dimensa::{DecibelWatts, Kilometers, Meters, Seconds};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct LinkBudget {
        #[serde(with = "dimensa::serde_with_unit")]
        range: Kilometers,

        // Compact: the type already documents the unit.
        antenna_height: Meters,

        #[serde(with = "dimensa::serde_with_unit")]
        transmit: DecibelWatts,

        #[serde(with = "dimensa::serde_with_unit")]
        timeout: Seconds,
    }

    let budget = LinkBudget {
        range: Kilometers::new(42.0),
        antenna_height: Meters::new(12.5),
        transmit: DecibelWatts::new(20.0),
        timeout: Seconds::new(30.0),
    };

    let json = serde_json::to_string_pretty(&budget).unwrap();
    println!("Serialized:\n{json}\n");
    let restored: LinkBudget = serde_json::from_str(&json).unwrap();
    println!("Restored: {restored:?}\n");

    #[derive(Deserialize, Debug)]
    struct Range {
        #[serde(with = "dimensa::serde_with_unit")]
        range: Kilometers,
    }

    let untagged: Range = serde_json::from_str(r#"{"range": {"value": 5.0}}"#).unwrap();
    println!("Missing unit is accepted: {}", untagged.range);

    match serde_json::from_str::<Range>(r#"{"range": {"value": 5.0, "unit": "mi"}}"#) {
        Ok(r) => println!("Unexpected success: {}", r.range),
        Err(e) => println!("Rejected foreign unit: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
