//! Parsing of the line-oriented `key = value` format shared by the user
//! configuration file and the per-language definitions.
//!
//! ```text
//! ; comment
//! # comment
//! [section]
//! name = Jane Doe
//! email = "jane@example.com"
//! ```

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;

/// Ordered flat mapping of property names to values.
pub type Properties = IndexMap<String, String>;

/// Classification of a single line, decided by its first character.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty, whitespace-leading, `;` or `#` line.
    Blank,
    /// `[name]` marker.
    Section(&'a str),
    /// Anything else.
    Property,
}

/// Classifies a line without interpreting it.
pub fn classify_line(line: &str) -> Line<'_> {
    match line.chars().next() {
        None | Some(' ' | '\t' | ';' | '#') => Line::Blank,
        Some('[') => {
            let inner = &line[1..];
            Line::Section(inner.strip_suffix(']').unwrap_or(inner))
        }
        Some(_) => Line::Property,
    }
}

/// Splits a property line on its first `=`, trimming spaces and tabs around it.
///
/// Returns `None` when the line has no `=` or the key is empty.
pub fn parse_property(line: &str) -> Option<(String, String)> {
    let (key, raw) = line.split_once('=')?;
    let key = key.trim_end_matches([' ', '\t']);
    if key.is_empty() {
        return None;
    }
    let raw = raw.trim_start_matches([' ', '\t']);
    Some((key.to_string(), parse_value(raw).to_string()))
}

/// Unwraps a double-quoted value. Interior text is kept verbatim, there are
/// no escape sequences.
pub fn parse_value(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// Parses configuration text. `origin` is only used in error messages.
///
/// # Errors
/// * `Error::ConfigSyntaxError` for a property line without `=`
pub fn parse_config(content: &str, origin: &str) -> Result<Properties> {
    let mut properties = Properties::new();

    for (index, line) in content.lines().enumerate() {
        match classify_line(line) {
            Line::Blank => {}
            // Sections are recognised but inert: keys live in one flat namespace.
            Line::Section(name) => debug!("Ignoring section marker [{name}] in {origin}"),
            Line::Property => {
                let (key, value) =
                    parse_property(line).ok_or_else(|| Error::ConfigSyntaxError {
                        path: origin.to_string(),
                        line: index + 1,
                        content: line.to_string(),
                    })?;
                properties.insert(key, value);
            }
        }
    }

    Ok(properties)
}

/// Reads and parses a configuration resource.
///
/// # Errors
/// * `Error::ResourceNotFoundError` if the file is missing or unreadable
/// * `Error::ConfigSyntaxError` for a malformed property line
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<Properties> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| Error::ResourceNotFoundError {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content, &path.display().to_string())
}
