//! YAML parsing into [`ConfigDocument`].

use serde_yaml::Value;

use super::{ConfigDocument, Mapping, Scalar};
use crate::error::ParseError;

/// Parse raw file content into a document.
///
/// Merge keys (`<<: *anchor`) are applied, tags are dropped in favour of the
/// tagged value, and scalar mapping keys are converted to strings.
///
/// # Errors
///
/// Returns an error if the content is not valid YAML or uses a mapping or
/// sequence as a mapping key.
pub fn parse_document(bytes: &[u8]) -> Result<ConfigDocument, ParseError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ConfigDocument::null());
    }
    let mut value: Value = serde_yaml::from_slice(bytes)?;
    value.apply_merge()?;
    ConfigDocument::try_from(value)
}

impl TryFrom<Value> for ConfigDocument {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let doc = match value {
            Value::Null => Scalar::Null.into(),
            Value::Bool(b) => Scalar::Bool(b).into(),
            Value::Number(n) => Scalar::Number(n).into(),
            Value::String(s) => Scalar::String(s).into(),
            Value::Sequence(items) => ConfigDocument::Sequence(
                items
                    .into_iter()
                    .map(ConfigDocument::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(entries) => {
                let mut map = Mapping::new();
                for (key, value) in entries {
                    let key = key_to_string(key)?;
                    if map.contains_key(&key) {
                        return Err(ParseError::DuplicateKey { key });
                    }
                    map.insert(key, ConfigDocument::try_from(value)?);
                }
                ConfigDocument::Mapping(map)
            }
            Value::Tagged(tagged) => ConfigDocument::try_from(tagged.value)?,
        };
        Ok(doc)
    }
}

fn key_to_string(key: Value) -> Result<String, ParseError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        Value::Sequence(_) => Err(ParseError::UnsupportedKey { kind: "sequence" }),
        Value::Mapping(_) => Err(ParseError::UnsupportedKey { kind: "mapping" }),
    }
}
