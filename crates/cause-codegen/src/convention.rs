//! Naming conventions linking a union's discriminant to the constants of its variants.
//!
//! Nothing in the analyzed declarations states which discriminant value selects which variant,
//! or which constants enumerate the values of a variant. The generator relies on a naming
//! convention instead, expressed by the [`NamingConvention`] trait. The default convention,
//! [`PresentMarker`], matches code generated from ASN.1 definitions of NGAP:
//!
//! ```text
//! pub struct Cause { pub present: i32, pub transport: Option<Box<CauseTransport>>, .. }
//! pub const CausePresentTransport: i32 = 2;
//! pub const CauseTransportPresentUnspecified: i64 = 1;
//! ```

use std::{borrow::Cow, fmt};

/// Naming convention used to derive labels and discriminant constant names.
pub trait NamingConvention: fmt::Debug {
    /// Returns the human-readable label of the variant stored in `field_name`.
    fn variant_label(&self, field_name: &str) -> String;

    /// Returns the name of the discriminant constant selecting the variant with `variant_label`.
    fn present_constant(&self, variant_label: &str) -> String;

    /// Returns the diagnostic label for `constant` of the variant with `variant_label`,
    /// or `None` if the constant does not follow the convention.
    fn mapping_label(&self, variant_label: &str, constant: &str) -> Option<String>;
}

/// Convention based on the `Present` marker: discriminant constants are named
/// `CausePresent<Variant>`, and variant constants `<Type>Present<Value>`.
#[derive(Debug, Clone)]
pub struct PresentMarker {
    marker: Cow<'static, str>,
    discriminant_prefix: Cow<'static, str>,
}

impl Default for PresentMarker {
    fn default() -> Self {
        Self {
            marker: Cow::Borrowed(Self::MARKER),
            discriminant_prefix: Cow::Borrowed(Self::DISCRIMINANT_PREFIX),
        }
    }
}

impl PresentMarker {
    /// Marker separating the type name from the value name in variant constants.
    pub const MARKER: &'static str = "Present";
    /// Prefix of discriminant constants.
    pub const DISCRIMINANT_PREFIX: &'static str = "CausePresent";

    /// Creates a convention with custom marker and discriminant prefix.
    pub fn new(
        marker: impl Into<Cow<'static, str>>,
        discriminant_prefix: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            marker: marker.into(),
            discriminant_prefix: discriminant_prefix.into(),
        }
    }
}

impl NamingConvention for PresentMarker {
    fn variant_label(&self, field_name: &str) -> String {
        to_upper_camel_case(field_name)
    }

    fn present_constant(&self, variant_label: &str) -> String {
        format!("{}{variant_label}", self.discriminant_prefix)
    }

    fn mapping_label(&self, variant_label: &str, constant: &str) -> Option<String> {
        let (_, value_name) = constant.split_once(self.marker.as_ref())?;
        Some(format!("{variant_label} : {value_name}"))
    }
}

/// Converts a `snake_case` identifier to `UpperCamelCase`. Identifiers already in camel case
/// keep their inner capitalization.
pub fn to_upper_camel_case(ident: &str) -> String {
    ident
        .split('_')
        .filter(|part| !part.is_empty())
        .flat_map(|part| {
            let mut chars = part.chars();
            let first = chars.next().map(|ch| ch.to_ascii_uppercase());
            first.into_iter().chain(chars)
        })
        .collect()
}

/// Converts an `UpperCamelCase` or `snake_case` identifier to `snake_case`.
pub fn to_snake_case(ident: &str) -> String {
    let mut snake = String::with_capacity(ident.len() + 4);
    let mut prev_is_lower_or_digit = false;
    for ch in ident.chars() {
        if ch.is_ascii_uppercase() {
            if prev_is_lower_or_digit {
                snake.push('_');
            }
            snake.push(ch.to_ascii_lowercase());
            prev_is_lower_or_digit = false;
        } else {
            prev_is_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            snake.push(ch);
        }
    }
    snake
}
