//! Java-properties-style key/value file parsing
//!
//! `key.properties` is written for `java.util.Properties`, so the parser
//! accepts the subset that consumer actually sees: one `key=value` (or
//! `key: value`) pair per line, `#`/`!` comments, blank lines. Unicode
//! escapes and backslash line continuations are not interpreted.

use crate::error::{ConfigError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Read and parse a properties file
///
/// The caller is expected to have checked that the file exists; a missing
/// file surfaces as [`ConfigError::Io`].
pub fn load(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)?;
    parse(&content, path)
}

/// Parse properties text
///
/// The first unescaped `=` or `:` on a line separates key from value; both
/// sides are trimmed. Later duplicate keys win, matching
/// `java.util.Properties`. A non-blank, non-comment line without a
/// separator fails with [`ConfigError::MalformedPropertiesFile`] carrying
/// the 1-based line number.
pub fn parse(content: &str, path: &Path) -> Result<HashMap<String, String>> {
    let mut entries = HashMap::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let separator = line.find(['=', ':']);
        let Some(pos) = separator else {
            return Err(ConfigError::MalformedPropertiesFile {
                path: path.to_path_buf(),
                line: index + 1,
                reason: format!("expected `key=value`, got `{line}`"),
            });
        };

        let key = line[..pos].trim();
        let value = line[pos + 1..].trim();
        if key.is_empty() {
            return Err(ConfigError::MalformedPropertiesFile {
                path: path.to_path_buf(),
                line: index + 1,
                reason: "empty key".to_string(),
            });
        }

        entries.insert(key.to_string(), value.to_string());
    }

    Ok(entries)
}
