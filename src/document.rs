//! JSON documents carrying a top-level version field

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::VersionRepr;
use crate::error::{NumbumpError, Result};

/// A JSON object read from a file or standard input
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Parse JSON text; the top level must be an object.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        match value {
            Value::Object(root) => Ok(Document { root }),
            _ => Err(NumbumpError::document("top-level JSON value is not an object")),
        }
    }

    /// Read a document from `path`, or from standard input when `None`.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Document::parse(&fs::read_to_string(path)?),
            None => Document::from_reader(io::stdin().lock()),
        }
    }

    /// Read a whole document from `reader`.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Document::parse(&text)
    }

    /// The version stored under `field`
    pub fn version(&self, field: &str) -> Result<VersionRepr> {
        let value = self
            .root
            .get(field)
            .ok_or_else(|| NumbumpError::document(format!("missing field '{}'", field)))?;
        VersionRepr::from_json(value)
    }

    /// Replace the value under `field`
    pub fn set_version(&mut self, field: &str, version: &VersionRepr) -> Result<()> {
        self.root.insert(field.to_string(), version.to_json()?);
        Ok(())
    }

    /// Serialize with sorted keys and `indent` spaces per level.
    ///
    /// No trailing newline is added.
    pub fn to_pretty_string(&self, indent: usize) -> Result<String> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|_| NumbumpError::document("serialized JSON is not UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_object() {
        let err = Document::parse("[1, 2]").unwrap_err();
        assert!(matches!(err, NumbumpError::Document(_)));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            Document::parse("{\"version\": "),
            Err(NumbumpError::Json(_))
        ));
    }

    #[test]
    fn test_from_reader() {
        let input = std::io::Cursor::new(b"{\"version\": \"1.5\"}\n".to_vec());
        let doc = Document::from_reader(input).unwrap();
        assert_eq!(doc.version("version").unwrap(), VersionRepr::from("1.5"));
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let input = std::io::Cursor::new(vec![0xff, 0xfe]);
        assert!(matches!(
            Document::from_reader(input),
            Err(NumbumpError::Io(_))
        ));
    }

    #[test]
    fn test_version_lookup() {
        let doc = Document::parse(r#"{"name": "ext", "version": 3}"#).unwrap();
        assert_eq!(doc.version("version").unwrap(), VersionRepr::Integer(3));
        assert!(matches!(
            doc.version("release"),
            Err(NumbumpError::Document(_))
        ));
    }

    #[test]
    fn test_set_version_and_serialize_sorted() {
        let mut doc = Document::parse(r#"{"version": 3, "name": "ext", "uuid": "a@b"}"#).unwrap();
        doc.set_version("version", &VersionRepr::Float(3.1)).unwrap();

        let out = doc.to_pretty_string(2).unwrap();
        assert_eq!(
            out,
            "{\n  \"name\": \"ext\",\n  \"uuid\": \"a@b\",\n  \"version\": 3.1\n}"
        );
    }

    #[test]
    fn test_serialize_custom_indent() {
        let doc = Document::parse(r#"{"version": "1"}"#).unwrap();
        assert_eq!(
            doc.to_pretty_string(4).unwrap(),
            "{\n    \"version\": \"1\"\n}"
        );
    }
}
