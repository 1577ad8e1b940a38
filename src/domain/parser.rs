use crate::domain::formatter::canonical_text;
use crate::domain::repr::VersionRepr;
use crate::domain::style::{SourceKind, StyleDescriptor};
use crate::error::{NumbumpError, Result};

/// Extract the numeric value and the writing style of a version.
///
/// Text without a `.` is fixed point; text with one records how many
/// characters follow the separator (separator included). Integers are always
/// fixed point. Floats take their place count from their canonical rendering
/// (`1.0` has two).
///
/// # Errors
/// * Text that is not a number, or bytes that are not ASCII
/// * Values that parse to NaN or an infinity
///
/// # Example
/// ```ignore
/// let (value, style) = parse(&VersionRepr::from("2.50"))?;
/// assert_eq!(value, 2.5);
/// assert_eq!(style.decimal_places(), Some(3));
/// ```
pub fn parse(original: &VersionRepr) -> Result<(f64, StyleDescriptor)> {
    match original {
        VersionRepr::Integer(i) => Ok((*i as f64, StyleDescriptor::fixed_point(SourceKind::Integer))),
        VersionRepr::Float(f) => {
            let value = require_finite(*f, original)?;
            let places = places_after_separator(&canonical_text(value)).unwrap_or(0);
            Ok((value, StyleDescriptor::fractional(SourceKind::Float, places)))
        }
        VersionRepr::Ascii(text) => parse_text(text, SourceKind::TextAscii, original),
        VersionRepr::Unicode(text) => parse_text(text, SourceKind::TextUnicode, original),
        VersionRepr::Bytes(bytes) => {
            if !bytes.is_ascii() {
                return Err(NumbumpError::parse(format!(
                    "version {} is not ASCII",
                    original
                )));
            }
            let text = String::from_utf8_lossy(bytes);
            parse_text(&text, SourceKind::TextBytes, original)
        }
    }
}

fn parse_text(
    text: &str,
    kind: SourceKind,
    original: &VersionRepr,
) -> Result<(f64, StyleDescriptor)> {
    let style = match places_after_separator(text) {
        Some(places) => StyleDescriptor::fractional(kind, places),
        None => StyleDescriptor::fixed_point(kind),
    };

    let value = text.trim().parse::<f64>().map_err(|_| {
        NumbumpError::parse(format!("version {} is not a number", original))
    })?;

    Ok((require_finite(value, original)?, style))
}

/// Characters from the first `.` to the end of `text`, separator included
fn places_after_separator(text: &str) -> Option<u32> {
    text.find('.')
        .map(|index| text[index..].chars().count() as u32)
}

fn require_finite(value: f64, original: &VersionRepr) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumbumpError::parse(format!(
            "version {} is not a finite number",
            original
        )))
    }
}
