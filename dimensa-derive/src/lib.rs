//! Derive macro implementation used by `dimensa-core`.
//!
//! `dimensa-derive` is the unit declaration contract of this workspace. By default the `Unit` derive expands in
//! terms of `crate::Unit`, `crate::Quantity` and friends, so it is meant to be used inside `dimensa-core`; other
//! crates point it at the facade with `krate = dimensa`.
//!
//! # Generated items
//!
//! For a unit marker type `MyUnit`, the derive emits:
//!
//! - `impl Unit for MyUnit` with an exact `ConversionFactor`, symbol and name
//! - `impl ReferenceUnit for MyUnit`
//! - `impl Marker for MyUnit` when `marker = Marker` is given
//! - `type Plural = Quantity<MyUnit>` when `plural = Plural` is given
//! - with `metric_prefixes`: twenty prefixed unit structs (yocto … yotta), each with the impls above and a plural
//!   alias
//! - with `binary_prefixes`: the six IEC prefixed unit structs (kibi … exbi, powers of 1024), likewise
//!
//! The derive emits no `From` impls. Prefixed units convert with `Quantity::to`; the unit table of `dimensa-core`
//! generates its own `From` conversions.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `name = "metre"`: long singular name (required)
//! - `symbol = "m"`: displayed unit symbol (required)
//! - exactly one of
//!   - `dimension = <Dimension expr>`: canonical unit of a dimension
//!   - `of = <unit path>`, optionally with `power = n`: built on another unit (`power` defaults to 1)
//! - `ratio = <Rational expr>`: scale relative to the definition (default 1)
//! - `pi = <Rational expr>`: extra factor `π^pi` (default 0)
//! - `offset = <Rational expr>`: affine offset in base units (default 0)
//! - `plural = Ident`, `marker = Path`, `metric_prefixes`, `binary_prefixes`, `krate = Path` as described above
//!
//! Integer literals and `a / b` literal fractions are accepted wherever a `Rational` is expected.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, BinOp, DeriveInput, Expr, ExprLit, Ident, Lit, LitStr, Path,
    Token, UnOp, Visibility,
};

/// SI prefixes: type-name prefix, name prefix, symbol prefix, power of ten.
const METRIC_PREFIXES: [(&str, &str, &str, i32); 20] = [
    ("Yocto", "yocto", "y", -24),
    ("Zepto", "zepto", "z", -21),
    ("Atto", "atto", "a", -18),
    ("Femto", "femto", "f", -15),
    ("Pico", "pico", "p", -12),
    ("Nano", "nano", "n", -9),
    ("Micro", "micro", "µ", -6),
    ("Milli", "milli", "m", -3),
    ("Centi", "centi", "c", -2),
    ("Deci", "deci", "d", -1),
    ("Deca", "deca", "da", 1),
    ("Hecto", "hecto", "h", 2),
    ("Kilo", "kilo", "k", 3),
    ("Mega", "mega", "M", 6),
    ("Giga", "giga", "G", 9),
    ("Tera", "tera", "T", 12),
    ("Peta", "peta", "P", 15),
    ("Exa", "exa", "E", 18),
    ("Zetta", "zetta", "Z", 21),
    ("Yotta", "yotta", "Y", 24),
];

/// IEC binary prefixes: type-name prefix, name prefix, symbol prefix, power of 1024.
const BINARY_PREFIXES: [(&str, &str, &str, u32); 6] = [
    ("Kibi", "kibi", "Ki", 1),
    ("Mebi", "mebi", "Mi", 2),
    ("Gibi", "gibi", "Gi", 3),
    ("Tebi", "tebi", "Ti", 4),
    ("Pebi", "pebi", "Pi", 5),
    ("Exbi", "exbi", "Ei", 6),
];

/// Derive `Unit` (plus marker, alias and prefix family) for a unit marker struct.
///
/// The derive must be paired with a `#[unit(...)]` attribute; see the crate docs for its keys.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let vis = &input.vis;
    let attr = parse_unit_attribute(&input.attrs)?;

    if let Some(plural) = &attr.plural {
        if plural == name {
            return Err(syn::Error::new(
                plural.span(),
                "`plural` must differ from the unit type name",
            ));
        }
    }

    let krate = &attr.krate;
    let base = match &attr.definition {
        Definition::Dimension(dimension) => quote! { #krate::ConversionFactor::base(#dimension) },
        Definition::Of { unit, power } => {
            let power = power.clone().unwrap_or_else(|| parse_quote!(1));
            quote! { <#unit as #krate::Unit>::FACTOR.powi(#power) }
        }
    };
    let ratio = rational_tokens(attr.ratio.as_ref(), krate, quote! { #krate::Rational::ONE });
    let pi = rational_tokens(attr.pi.as_ref(), krate, quote! { #krate::Rational::ZERO });
    let offset = rational_tokens(attr.offset.as_ref(), krate, quote! { #krate::Rational::ZERO });
    let factor = quote! { #base.scaled(#ratio).times_pi(#pi).with_offset(#offset) };

    let unit_impls = unit_items(
        name,
        vis,
        &attr,
        factor,
        &attr.symbol.value(),
        &attr.name.value(),
        attr.plural.as_ref(),
    );

    let metric = attr.metric_prefixes.then(|| metric_family(name, vis, &attr));
    let binary = attr.binary_prefixes.then(|| binary_family(name, vis, &attr));

    Ok(quote! {
        #unit_impls
        #metric
        #binary
    })
}

/// `Unit`/`ReferenceUnit`/marker impls and the plural alias of one unit.
fn unit_items(
    ident: &Ident,
    vis: &Visibility,
    attr: &UnitAttribute,
    factor: TokenStream2,
    symbol: &str,
    name: &str,
    plural: Option<&Ident>,
) -> TokenStream2 {
    let krate = &attr.krate;
    let marker = attr.marker.as_ref().map(|marker| quote! { impl #marker for #ident {} });
    let alias = plural.map(|plural| {
        let doc = format!("A quantity measured in {name} (`{symbol}`).");
        quote! {
            #[doc = #doc]
            #vis type #plural = #krate::Quantity<#ident>;
        }
    });

    quote! {
        impl #krate::Unit for #ident {
            const FACTOR: #krate::ConversionFactor = #factor;
            const SYMBOL: &'static str = #symbol;
            const NAME: &'static str = #name;
        }

        impl #krate::ReferenceUnit for #ident {}

        #marker
        #alias
    }
}

/// The twenty SI-prefixed variants of `base`.
fn metric_family(base: &Ident, vis: &Visibility, attr: &UnitAttribute) -> TokenStream2 {
    let krate = &attr.krate;
    let items = METRIC_PREFIXES.iter().map(|(type_prefix, name_prefix, symbol_prefix, exponent)| {
        let power = Literal::i128_unsuffixed(10i128.pow(exponent.unsigned_abs()));
        let ratio = if *exponent >= 0 {
            quote! { #krate::Rational::integer(#power) }
        } else {
            quote! { #krate::Rational::new(1, #power) }
        };
        let prefix = Prefix {
            type_prefix,
            name_prefix,
            symbol_prefix,
            scale: format!("10^{exponent}"),
        };
        prefixed_unit(base, vis, attr, &prefix, ratio)
    });
    quote! { #(#items)* }
}

/// The IEC binary-prefixed variants of `base` (kibi … exbi).
fn binary_family(base: &Ident, vis: &Visibility, attr: &UnitAttribute) -> TokenStream2 {
    let krate = &attr.krate;
    let items = BINARY_PREFIXES.iter().map(|(type_prefix, name_prefix, symbol_prefix, exponent)| {
        let power = Literal::i128_unsuffixed(1024i128.pow(*exponent));
        let ratio = quote! { #krate::Rational::integer(#power) };
        let prefix = Prefix {
            type_prefix,
            name_prefix,
            symbol_prefix,
            scale: format!("1024^{exponent}"),
        };
        prefixed_unit(base, vis, attr, &prefix, ratio)
    });
    quote! { #(#items)* }
}

struct Prefix<'a> {
    type_prefix: &'a str,
    name_prefix: &'a str,
    symbol_prefix: &'a str,
    scale: String,
}

/// One prefixed unit: `Kilo` + `meter` becomes `Kilometer`, with plural `Kilometers` when the base has one.
fn prefixed_unit(
    base: &Ident,
    vis: &Visibility,
    attr: &UnitAttribute,
    prefix: &Prefix<'_>,
    ratio: TokenStream2,
) -> TokenStream2 {
    let krate = &attr.krate;
    let base_name = attr.name.value();
    let ident = format_ident!("{}{}", prefix.type_prefix, base.to_string().to_lowercase());
    let plural = attr
        .plural
        .as_ref()
        .map(|plural| format_ident!("{}{}", prefix.type_prefix, plural.to_string().to_lowercase()));
    let symbol = format!("{}{}", prefix.symbol_prefix, attr.symbol.value());
    let name = format!("{}{}", prefix.name_prefix, base_name);
    let doc = format!("{name} (`{symbol}`, {} {base_name}).", prefix.scale);

    let factor = quote! { <#base as #krate::Unit>::FACTOR.scaled(#ratio) };
    let impls = unit_items(&ident, vis, attr, factor, &symbol, &name, plural.as_ref());

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        #vis struct #ident;

        #impls
    }
}

/// `true` for `123` and `-123`.
fn is_integer_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(_), .. }) => true,
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => is_integer_literal(&unary.expr),
        Expr::Paren(paren) => is_integer_literal(&paren.expr),
        _ => false,
    }
}

/// Lowers integer and `a / b` literals to `Rational` constructors; other expressions pass through.
fn rational_tokens(expr: Option<&Expr>, krate: &Path, default: TokenStream2) -> TokenStream2 {
    let Some(expr) = expr else {
        return default;
    };
    match expr {
        e if is_integer_literal(e) => quote! { #krate::Rational::integer(#e) },
        Expr::Binary(binary)
            if matches!(binary.op, BinOp::Div(_))
                && is_integer_literal(&binary.left)
                && is_integer_literal(&binary.right) =>
        {
            let (num, den) = (&binary.left, &binary.right);
            quote! { #krate::Rational::new(#num, #den) }
        }
        other => quote! { #other },
    }
}

/// How a unit is defined.
enum Definition {
    /// Canonical unit of a dimension.
    Dimension(Expr),
    /// Power of another unit.
    Of { unit: Path, power: Option<Expr> },
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    name: LitStr,
    symbol: LitStr,
    plural: Option<Ident>,
    marker: Option<Path>,
    definition: Definition,
    ratio: Option<Expr>,
    pi: Option<Expr>,
    offset: Option<Expr>,
    metric_prefixes: bool,
    binary_prefixes: bool,
    krate: Path,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut symbol: Option<LitStr> = None;
        let mut plural: Option<Ident> = None;
        let mut marker: Option<Path> = None;
        let mut dimension: Option<Expr> = None;
        let mut of: Option<Path> = None;
        let mut power: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;
        let mut pi: Option<Expr> = None;
        let mut offset: Option<Expr> = None;
        let mut metric_prefixes = false;
        let mut binary_prefixes = false;
        let mut krate: Option<Path> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            if ident == "metric_prefixes" {
                metric_prefixes = true;
            } else if ident == "binary_prefixes" {
                binary_prefixes = true;
            } else {
                input.parse::<Token![=]>()?;
                match ident.to_string().as_str() {
                    "name" => name = Some(input.parse()?),
                    "symbol" => symbol = Some(input.parse()?),
                    "plural" => plural = Some(input.parse()?),
                    "marker" => marker = Some(input.parse()?),
                    "dimension" => dimension = Some(input.parse()?),
                    "of" => of = Some(input.parse()?),
                    "power" => power = Some(input.parse()?),
                    "ratio" => ratio = Some(input.parse()?),
                    "pi" => pi = Some(input.parse()?),
                    "offset" => offset = Some(input.parse()?),
                    "krate" => krate = Some(input.parse()?),
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown attribute `{}`", other),
                        ));
                    }
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name = name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let symbol =
            symbol.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        let definition = match (dimension, of) {
            (Some(_), Some(_)) => {
                return Err(syn::Error::new(
                    input.span(),
                    "`dimension` and `of` are mutually exclusive",
                ))
            }
            (None, None) => {
                return Err(syn::Error::new(
                    input.span(),
                    "missing required attribute `dimension` or `of`",
                ))
            }
            (Some(dimension), None) => {
                if power.is_some() {
                    return Err(syn::Error::new(input.span(), "`power` requires `of`"));
                }
                Definition::Dimension(dimension)
            }
            (None, Some(unit)) => Definition::Of { unit, power },
        };

        Ok(UnitAttribute {
            name,
            symbol,
            plural,
            marker,
            definition,
            ratio,
            pi,
            offset,
            metric_prefixes,
            binary_prefixes,
            krate: krate.unwrap_or_else(|| parse_quote!(crate)),
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(Span::call_site(), "missing #[unit(...)] attribute"))
}
