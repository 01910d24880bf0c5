//! Discovery of configuration sources within one level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::{Pattern, PatternError};

/// File name used when no patterns are configured.
pub const DEFAULT_FILE_NAME: &str = "config.yaml";

/// File name patterns selecting which files of a level are configuration
/// sources.
///
/// Patterns are glob patterns matched against the bare file name, e.g.
/// `config.yaml` or `*.y*ml`. An empty set selects [`DEFAULT_FILE_NAME`].
#[derive(Debug, Clone, Default)]
pub struct SourcePatterns {
    patterns: Vec<Pattern>,
}

impl SourcePatterns {
    /// Compile a list of glob patterns.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Check whether a file name selects a configuration source.
    pub fn matches(&self, file_name: &str) -> bool {
        if self.patterns.is_empty() {
            return file_name == DEFAULT_FILE_NAME;
        }
        self.patterns.iter().any(|p| p.matches(file_name))
    }

    /// The pattern strings, as written.
    pub fn as_strs(&self) -> Vec<&str> {
        if self.patterns.is_empty() {
            return vec![DEFAULT_FILE_NAME];
        }
        self.patterns.iter().map(Pattern::as_str).collect()
    }
}

/// List the configuration files of one level, sorted by file name.
///
/// A level directory that does not exist has no sources. Entries that are not
/// regular files (after following symlinks) or whose names are not valid
/// UTF-8 are ignored.
pub(crate) fn level_sources(dir: &Path, patterns: &SourcePatterns) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !patterns.matches(name) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            sources.push(path);
        }
    }

    sources.sort();
    Ok(sources)
}
