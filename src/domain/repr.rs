use crate::domain::formatter::canonical_text;
use crate::error::{NumbumpError, Result};
use serde_json::{Number, Value};
use std::fmt;

/// A version value as it appears in a document.
///
/// Numbers keep their integer/float distinction and text keeps its encoding,
/// so an updated value can be written back in the same shape it was read.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionRepr {
    Integer(i64),
    Float(f64),
    /// Plain ASCII text
    Ascii(String),
    /// Raw bytes holding ASCII digits
    Bytes(Vec<u8>),
    /// Unicode text (what JSON strings decode to)
    Unicode(String),
}

impl VersionRepr {
    /// Convert a JSON value into a version representation.
    ///
    /// Integers that fit in `i64` become [VersionRepr::Integer], every other
    /// number becomes [VersionRepr::Float] and strings become
    /// [VersionRepr::Unicode]. Anything else cannot hold a version.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(VersionRepr::Integer(i))
                } else if n.is_u64() {
                    Err(NumbumpError::parse(format!(
                        "integer version {} is out of range",
                        n
                    )))
                } else {
                    n.as_f64().map(VersionRepr::Float).ok_or_else(|| {
                        NumbumpError::parse(format!("unsupported number: {}", n))
                    })
                }
            }
            Value::String(s) => Ok(VersionRepr::Unicode(s.clone())),
            other => Err(NumbumpError::parse(format!(
                "unsupported version representation: {}",
                other
            ))),
        }
    }

    /// Convert back into a JSON value.
    pub fn to_json(&self) -> Result<Value> {
        match self {
            VersionRepr::Integer(i) => Ok(Value::from(*i)),
            VersionRepr::Float(f) => Number::from_f64(*f).map(Value::Number).ok_or_else(|| {
                NumbumpError::document(format!("cannot store non-finite version {}", f))
            }),
            VersionRepr::Ascii(s) | VersionRepr::Unicode(s) => Ok(Value::String(s.clone())),
            VersionRepr::Bytes(b) => String::from_utf8(b.clone())
                .map(Value::String)
                .map_err(|_| NumbumpError::document("version bytes are not valid text")),
        }
    }
}

/// Renders numbers bare and text quoted, e.g. `5.1`, `"2.6"`, `b"3"`.
impl fmt::Display for VersionRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRepr::Integer(i) => write!(f, "{}", i),
            VersionRepr::Float(v) => write!(f, "{}", canonical_text(*v)),
            VersionRepr::Ascii(s) | VersionRepr::Unicode(s) => write!(f, "{:?}", s),
            VersionRepr::Bytes(b) => write!(f, "b{:?}", String::from_utf8_lossy(b)),
        }
    }
}

impl From<i64> for VersionRepr {
    fn from(value: i64) -> Self {
        VersionRepr::Integer(value)
    }
}

impl From<f64> for VersionRepr {
    fn from(value: f64) -> Self {
        VersionRepr::Float(value)
    }
}

impl From<&str> for VersionRepr {
    fn from(value: &str) -> Self {
        VersionRepr::Unicode(value.to_string())
    }
}
