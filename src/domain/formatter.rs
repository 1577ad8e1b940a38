use crate::domain::repr::VersionRepr;
use crate::domain::style::{SourceKind, StyleDescriptor};

/// Render `value` in the style of the original version.
///
/// Text originals render back to the same text encoding; numeric originals
/// render back to an integer or a float. A fixed-point style only survives
/// while the value stays integral; otherwise the value is rendered as a
/// float (see [StyleDescriptor::effective]).
///
/// Rounding to `n` places never pads with zeros, so `"1.00"` comes back as
/// `"1.0"`.
///
/// # Arguments
/// * `value` - The new numeric version
/// * `style` - Style inferred from the original version
/// * `places_override` - Decimal places to use instead of the inferred count
pub fn format(value: f64, style: &StyleDescriptor, places_override: Option<u32>) -> VersionRepr {
    let effective = style.effective(value, places_override);
    let places = effective.decimal_places.filter(|&p| p > 0);

    let render_text = || {
        if effective.is_fixed_point {
            integer_text(value)
        } else {
            canonical_text(places.map_or(value, |p| round_to(value, p)))
        }
    };

    match style.source_kind() {
        // Truncate: a fixed-point slot never carries a fraction
        SourceKind::Integer | SourceKind::Float if effective.is_fixed_point => {
            VersionRepr::Integer(value.trunc() as i64)
        }
        SourceKind::Integer | SourceKind::Float => {
            VersionRepr::Float(places.map_or(value, |p| round_to(value, p)))
        }
        SourceKind::TextAscii => VersionRepr::Ascii(render_text()),
        SourceKind::TextBytes => VersionRepr::Bytes(render_text().into_bytes()),
        SourceKind::TextUnicode => VersionRepr::Unicode(render_text()),
    }
}

/// Shortest round-trip text for `value`, always with a fractional part (`3.0`).
///
/// Very large or small values use exponent form with an explicit sign and at
/// least two exponent digits (`1e+17`, `1e-05`).
pub(crate) fn canonical_text(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

fn integer_text(value: f64) -> String {
    // Adding zero turns -0.0 into 0.0
    format!("{:.0}", value.trunc() + 0.0)
}

/// Round to `places` fractional digits using the exact binary value
fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}
