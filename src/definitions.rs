//! Per-language metadata: comment syntax, file extensions and whether a
//! header is generated alongside the source file.

use crate::error::{Error, Result};
use crate::loader::SupportRoot;
use crate::parser::{parse_config_file, Properties};

/// Definitions of the run's selected language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDefinition {
    pub language: String,
    /// Line comment token, used to comment out the license block.
    pub comment: String,
    /// `has-header = yes`.
    pub has_header: bool,
    /// Checked by the processor only when a header is actually generated.
    pub header_extension: Option<String>,
    pub source_extension: String,
    /// Interpreter written as `#!<shebang>` on the first line of sources.
    pub shebang: Option<String>,
}

impl LanguageDefinition {
    /// Types a parsed definitions resource.
    ///
    /// # Errors
    /// * `Error::DefinitionError` when `comment` or `source-extension` is missing
    pub fn from_properties(language: &str, properties: &Properties) -> Result<Self> {
        let required = |key: &str| {
            properties.get(key).cloned().ok_or_else(|| Error::DefinitionError {
                language: language.to_string(),
                key: key.to_string(),
            })
        };

        Ok(Self {
            language: language.to_string(),
            comment: required("comment")?,
            has_header: properties.get("has-header").is_some_and(|value| value == "yes"),
            header_extension: properties.get("header-extension").cloned(),
            source_extension: required("source-extension")?,
            shebang: properties.get("shebang").cloned(),
        })
    }

    /// Loads `templates/languages/<language>/definitions` from the support root.
    pub fn load(root: &SupportRoot, language: &str) -> Result<Self> {
        let properties = parse_config_file(root.resolve(SupportRoot::definitions(language)))?;
        Self::from_properties(language, &properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(pairs: &[(&str, &str)]) -> Properties {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_header_language() {
        let definition = LanguageDefinition::from_properties(
            "c",
            &properties(&[
                ("comment", "//"),
                ("has-header", "yes"),
                ("header-extension", "h"),
                ("source-extension", "c"),
            ]),
        )
        .unwrap();

        assert!(definition.has_header);
        assert_eq!(definition.header_extension.as_deref(), Some("h"));
        assert_eq!(definition.source_extension, "c");
        assert_eq!(definition.shebang, None);
    }

    #[test]
    fn test_script_language_without_header() {
        let definition = LanguageDefinition::from_properties(
            "ruby",
            &properties(&[
                ("comment", "#"),
                ("has-header", "no"),
                ("source-extension", "rb"),
                ("shebang", "/usr/bin/env ruby"),
            ]),
        )
        .unwrap();

        assert!(!definition.has_header);
        assert_eq!(definition.header_extension, None);
        assert_eq!(definition.shebang.as_deref(), Some("/usr/bin/env ruby"));
    }

    #[test]
    fn test_header_extension_is_optional_at_load() {
        let definition = LanguageDefinition::from_properties(
            "c",
            &properties(&[("comment", "//"), ("has-header", "yes"), ("source-extension", "c")]),
        )
        .unwrap();

        assert!(definition.has_header);
        assert_eq!(definition.header_extension, None);
    }

    #[test]
    fn test_missing_source_extension() {
        let result = LanguageDefinition::from_properties("c", &properties(&[("comment", "//")]));

        match result {
            Err(Error::DefinitionError { language, key }) => {
                assert_eq!(language, "c");
                assert_eq!(key, "source-extension");
            }
            other => panic!("Expected DefinitionError, got {other:?}"),
        }
    }
}
