use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Type-name prefixes produced by `metric_prefixes`.
const METRIC_PREFIXES: [&str; 20] = [
    "Yocto", "Zepto", "Atto", "Femto", "Pico", "Nano", "Micro", "Milli", "Centi", "Deci", "Deca", "Hecto",
    "Kilo", "Mega", "Giga", "Tera", "Peta", "Exa", "Zetta", "Yotta",
];

/// Type-name prefixes produced by `binary_prefixes`.
const BINARY_PREFIXES: [&str; 6] = ["Kibi", "Mebi", "Gibi", "Tebi", "Pebi", "Exbi"];

/// `Dimension` constants a record may name.
const DIMENSIONS: [&str; 22] = [
    "DIMENSIONLESS",
    "LENGTH",
    "MASS",
    "TIME",
    "ANGLE",
    "CURRENT",
    "TEMPERATURE",
    "SUBSTANCE",
    "LUMINOUS_INTENSITY",
    "AREA",
    "VOLUME",
    "FREQUENCY",
    "VELOCITY",
    "ACCELERATION",
    "ANGULAR_VELOCITY",
    "SOLID_ANGLE",
    "FORCE",
    "ENERGY",
    "POWER",
    "PRESSURE",
    "CHARGE",
    "VOLTAGE",
];

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = env::var("OUT_DIR").unwrap();

    // Re-run if units.toml changes
    println!("cargo:rerun-if-changed=units.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let table = parse_units_toml(&crate_dir);

    let mut declared = 0;
    for module in &table.module {
        validate_module(module);
        if module.unit.is_empty() {
            println!(
                "cargo:warning=units.toml: module `{}` declares no units; generating an empty file",
                module.name
            );
        }
        generate_module(module, &out_dir);
        declared += module.unit.len();
    }

    if declared == 0 {
        println!("cargo:warning=units.toml declares no units");
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitTable {
    #[serde(default)]
    module: Vec<ModuleDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleDef {
    name: String,
    marker: String,
    #[serde(default)]
    unit: Vec<UnitDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitDef {
    unit: String,
    plural: Option<String>,
    name: String,
    symbol: String,
    dimension: Option<String>,
    of: Option<String>,
    power: Option<i32>,
    ratio: Option<RatioValue>,
    pi: Option<RatioValue>,
    offset: Option<RatioValue>,
    #[serde(default)]
    prefixes: bool,
    #[serde(default)]
    binary_prefixes: bool,
    doc: Option<String>,
}

impl UnitDef {
    /// Type names of the prefixed variants the derive will declare for this record.
    fn prefixed_types(&self) -> Vec<String> {
        let metric = METRIC_PREFIXES.iter().filter(|_| self.prefixes);
        let binary = BINARY_PREFIXES.iter().filter(|_| self.binary_prefixes);
        metric
            .chain(binary)
            .map(|prefix| format!("{prefix}{}", self.unit.to_lowercase()))
            .collect()
    }
}

/// A rational written either as a TOML integer or as `"num/den"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RatioValue {
    Integer(i64),
    Text(String),
}

fn parse_units_toml(crate_dir: &str) -> UnitTable {
    let path = PathBuf::from(crate_dir).join("units.toml");
    let content = fs::read_to_string(&path).expect("Failed to read units.toml");
    toml::from_str(&content).unwrap_or_else(|err| panic!("Invalid units.toml: {err}"))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `(numerator, denominator)` of a table rational, denominator nonzero.
fn parse_ratio(value: &RatioValue, field: &str, unit: &str) -> (i128, i128) {
    let (num, den) = match value {
        RatioValue::Integer(n) => (*n as i128, 1),
        RatioValue::Text(text) => {
            let parse = |part: &str| {
                part.trim()
                    .replace('_', "")
                    .parse::<i128>()
                    .unwrap_or_else(|_| panic!("Invalid `{field}` for unit {unit}: {text:?}"))
            };
            match text.split_once('/') {
                Some((num, den)) => (parse(num), parse(den)),
                None => (parse(text), 1),
            }
        }
    };
    if den == 0 {
        panic!("Invalid `{field}` for unit {unit}: zero denominator");
    }
    (num, den)
}

fn validate_module(module: &ModuleDef) {
    if !is_identifier(&module.name) {
        panic!("Invalid module name: {:?}", module.name);
    }
    if !is_identifier(&module.marker) {
        panic!("Invalid marker for module {}: {:?}", module.name, module.marker);
    }

    // Every type the module will contain: units, plurals and prefixed variants of both.
    let mut names = HashSet::new();
    let mut claim = |ident: String, unit: &str| {
        if !names.insert(ident.clone()) {
            panic!("Duplicate type name `{ident}` in module {} (unit {unit})", module.name);
        }
    };

    for unit in &module.unit {
        let id = &unit.unit;
        if !is_identifier(id) {
            panic!("Invalid unit name in module {}: {:?}", module.name, id);
        }
        if unit.name.trim().is_empty() {
            panic!("Empty `name` for unit {id}");
        }
        if unit.symbol.trim().is_empty() {
            panic!("Empty `symbol` for unit {id}");
        }

        match (&unit.dimension, &unit.of) {
            (Some(_), Some(_)) => panic!("Unit {id} sets both `dimension` and `of`"),
            (None, None) => panic!("Unit {id} sets neither `dimension` nor `of`"),
            (Some(dimension), None) => {
                if !DIMENSIONS.contains(&dimension.as_str()) {
                    panic!("Unknown dimension for unit {id}: {dimension:?}");
                }
                if unit.power.is_some() {
                    panic!("Unit {id} sets `power` without `of`");
                }
            }
            (None, Some(of)) => {
                if of.trim().is_empty() {
                    panic!("Empty `of` for unit {id}");
                }
                if unit.power == Some(0) {
                    panic!("Unit {id} sets `power = 0`");
                }
            }
        }

        if let Some(ratio) = &unit.ratio {
            let (num, den) = parse_ratio(ratio, "ratio", id);
            if num == 0 || (num < 0) != (den < 0) {
                panic!("Unit {id} must have a positive `ratio`");
            }
        }
        if let Some(pi) = &unit.pi {
            parse_ratio(pi, "pi", id);
        }
        if let Some(offset) = &unit.offset {
            parse_ratio(offset, "offset", id);
        }

        claim(id.clone(), id);
        if let Some(plural) = &unit.plural {
            if !is_identifier(plural) {
                panic!("Invalid plural for unit {id}: {plural:?}");
            }
            claim(plural.clone(), id);
        }
        let metric = METRIC_PREFIXES.iter().filter(|_| unit.prefixes);
        let binary = BINARY_PREFIXES.iter().filter(|_| unit.binary_prefixes);
        for prefix in metric.chain(binary) {
            claim(format!("{prefix}{}", id.to_lowercase()), id);
            if let Some(plural) = &unit.plural {
                claim(format!("{prefix}{}", plural.to_lowercase()), id);
            }
        }
    }
}

/// Rust tokens for a table rational: `n` or `n / d`.
fn ratio_tokens(value: &RatioValue, field: &str, unit: &str) -> String {
    let (num, den) = parse_ratio(value, field, unit);
    if den == 1 {
        format!("{num}")
    } else {
        format!("{num} / {den}")
    }
}

fn generate_module(module: &ModuleDef, out_dir: &str) {
    let mut code = String::from("// Auto-generated from units.toml\n\n");

    for unit in &module.unit {
        let id = &unit.unit;
        let doc = unit
            .doc
            .clone()
            .unwrap_or_else(|| format!("{} (`{}`).", capitalize(&unit.name), unit.symbol));

        let mut attrs = vec![
            format!("name = {:?}", unit.name),
            format!("symbol = {:?}", unit.symbol),
        ];
        if let Some(plural) = &unit.plural {
            attrs.push(format!("plural = {plural}"));
        }
        attrs.push(format!("marker = {}", module.marker));
        match (&unit.dimension, &unit.of) {
            (Some(dimension), _) => attrs.push(format!("dimension = crate::Dimension::{dimension}")),
            (None, Some(of)) => {
                attrs.push(format!("of = {of}"));
                if let Some(power) = unit.power {
                    attrs.push(format!("power = {power}"));
                }
            }
            (None, None) => unreachable!("validated above"),
        }
        if let Some(ratio) = &unit.ratio {
            attrs.push(format!("ratio = {}", ratio_tokens(ratio, "ratio", id)));
        }
        if let Some(pi) = &unit.pi {
            attrs.push(format!("pi = {}", ratio_tokens(pi, "pi", id)));
        }
        if let Some(offset) = &unit.offset {
            attrs.push(format!("offset = {}", ratio_tokens(offset, "offset", id)));
        }
        if unit.prefixes {
            attrs.push("metric_prefixes".to_string());
        }
        if unit.binary_prefixes {
            attrs.push("binary_prefixes".to_string());
        }

        writeln!(code, "/// {doc}").unwrap();
        code.push_str("#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]\n");
        writeln!(code, "#[unit({})]", attrs.join(", ")).unwrap();
        writeln!(code, "pub struct {id};\n").unwrap();
    }

    // Every declared unit converts into every other one; prefixed variants convert to and from each declared
    // unit. Between two prefixed variants, `Quantity::to` is the conversion.
    let declared: Vec<&str> = module.unit.iter().map(|unit| unit.unit.as_str()).collect();
    let prefixed: Vec<String> = module.unit.iter().flat_map(UnitDef::prefixed_types).collect();
    for (i, from) in declared.iter().enumerate() {
        for to in &declared[i + 1..] {
            write_conversion(&mut code, from, to);
            write_conversion(&mut code, to, from);
        }
    }
    for from in &prefixed {
        for to in &declared {
            write_conversion(&mut code, from, to);
            write_conversion(&mut code, to, from);
        }
    }

    let dest_path = PathBuf::from(out_dir).join(format!("{}.rs", module.name));
    fs::write(&dest_path, code).unwrap_or_else(|_| panic!("Failed to write {}.rs", module.name));
}

/// `impl From<Quantity<From>> for Quantity<To>` through `Quantity::to`.
fn write_conversion(code: &mut String, from: &str, to: &str) {
    writeln!(
        code,
        "impl ::core::convert::From<crate::Quantity<{from}>> for crate::Quantity<{to}> {{\n    \
         #[inline]\n    \
         fn from(value: crate::Quantity<{from}>) -> Self {{\n        \
         value.to::<{to}>()\n    \
         }}\n\
         }}\n"
    )
    .unwrap();
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
