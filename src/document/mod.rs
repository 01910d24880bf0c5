//! Generic configuration document model.
//!
//! A [`ConfigDocument`] is what a single configuration file parses into and
//! what a merge produces: nested mappings, sequences and scalars.

mod parse;

use std::collections::BTreeMap;

use serde::Serialize;

pub use parse::parse_document;

/// Mapping from string keys to documents.
///
/// Ordered by key so that merging and serialization are deterministic.
pub type Mapping = BTreeMap<String, ConfigDocument>;

/// A scalar leaf value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
}

/// A structured configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigDocument {
    /// Keyed collection; merged key by key.
    Mapping(Mapping),
    /// Ordered collection; always replaced as a whole.
    Sequence(Vec<ConfigDocument>),
    /// Leaf value.
    Scalar(Scalar),
}

impl ConfigDocument {
    /// The empty mapping, which is the starting point of every merge.
    pub fn empty() -> Self {
        ConfigDocument::Mapping(Mapping::new())
    }

    /// The null scalar.
    pub fn null() -> Self {
        ConfigDocument::Scalar(Scalar::Null)
    }

    /// Short name of the document kind, used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigDocument::Mapping(_) => "mapping",
            ConfigDocument::Sequence(_) => "sequence",
            ConfigDocument::Scalar(_) => "scalar",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigDocument::Scalar(Scalar::Null))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigDocument::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ConfigDocument]> {
        match self {
            ConfigDocument::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigDocument::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigDocument::Scalar(Scalar::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigDocument::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Look up a key of a mapping document.
    pub fn get(&self, key: &str) -> Option<&ConfigDocument> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Follow a dotted path of mapping keys, e.g. `"database.pool.size"`.
    pub fn lookup(&self, path: &str) -> Option<&ConfigDocument> {
        path.split('.')
            .try_fold(self, |current, segment| current.get(segment))
    }
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Mapping> for ConfigDocument {
    fn from(map: Mapping) -> Self {
        ConfigDocument::Mapping(map)
    }
}

impl From<Vec<ConfigDocument>> for ConfigDocument {
    fn from(items: Vec<ConfigDocument>) -> Self {
        ConfigDocument::Sequence(items)
    }
}

impl From<Scalar> for ConfigDocument {
    fn from(scalar: Scalar) -> Self {
        ConfigDocument::Scalar(scalar)
    }
}

impl From<bool> for ConfigDocument {
    fn from(b: bool) -> Self {
        Scalar::Bool(b).into()
    }
}

impl From<i64> for ConfigDocument {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into()).into()
    }
}

impl From<f64> for ConfigDocument {
    fn from(n: f64) -> Self {
        Scalar::Number(n.into()).into()
    }
}

impl From<&str> for ConfigDocument {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string()).into()
    }
}

impl From<String> for ConfigDocument {
    fn from(s: String) -> Self {
        Scalar::String(s).into()
    }
}
