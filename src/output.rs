//! Rendering merged documents for the terminal.

use crate::chain::Chain;
use crate::config::OutputFormat;
use crate::document::ConfigDocument;
use crate::error::{HcmError, MergeError, Result};

/// Serialize a document in the requested format.
///
/// The result always ends with a newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_document(document: &ConfigDocument, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(document).map_err(|err| {
            HcmError::Render {
                message: err.to_string(),
            }
        })?,
        OutputFormat::Yaml => serde_yaml::to_string(document).map_err(|err| HcmError::Render {
            message: err.to_string(),
        })?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// One directory per line, base first.
pub fn render_chain(chain: &Chain) -> String {
    chain
        .iter()
        .map(|dir| format!("{}\n", dir.display()))
        .collect()
}

/// Format a collected level error for stderr.
pub fn format_warning(error: &MergeError, use_colors: bool) -> String {
    if use_colors {
        format!("\x1b[33mWarning:\x1b[0m {error}")
    } else {
        format!("Warning: {error}")
    }
}
