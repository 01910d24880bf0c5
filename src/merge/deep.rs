//! Deep merge of two documents.

use crate::document::ConfigDocument;

/// Merge `incoming` over `accumulator`.
///
/// Mappings are unioned key by key, recursing where both sides define a key.
/// Everything else is replaced wholesale by `incoming`: sequences are never
/// combined element-wise, and a kind mismatch (mapping vs scalar, sequence vs
/// mapping, ...) always resolves to the incoming value.
pub fn deep_merge(accumulator: ConfigDocument, incoming: ConfigDocument) -> ConfigDocument {
    match (accumulator, incoming) {
        (ConfigDocument::Mapping(mut merged), ConfigDocument::Mapping(overlay)) => {
            for (key, value) in overlay {
                let value = match merged.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                merged.insert(key, value);
            }
            ConfigDocument::Mapping(merged)
        }
        (ConfigDocument::Sequence(_), incoming @ ConfigDocument::Sequence(_)) => incoming,
        (ConfigDocument::Scalar(_), incoming) => incoming,
        (_, incoming @ ConfigDocument::Scalar(_)) => incoming,
        (ConfigDocument::Mapping(_), incoming @ ConfigDocument::Sequence(_)) => incoming,
        (ConfigDocument::Sequence(_), incoming @ ConfigDocument::Mapping(_)) => incoming,
    }
}
