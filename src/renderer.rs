//! Token rendering for codegen templates.
//! Tokens are flat `%%KEY%%` placeholders, there are no conditionals or loops.
use indexmap::IndexMap;

/// Builds the placeholder for `key`: upper-cased and wrapped in `%%`.
pub fn token(key: &str) -> String {
    format!("%%{}%%", key.to_uppercase())
}

/// Trait for token substitution backends.
pub trait TemplateRenderer {
    /// Replaces every token named in `tokens` with its value.
    ///
    /// # Arguments
    /// * `template` - Template text to render
    /// * `tokens` - Key/value pairs, keys are matched case-insensitively
    ///
    /// # Returns
    /// * `String` - Rendered text, unknown tokens are left verbatim
    fn render(&self, template: &str, tokens: &IndexMap<String, String>) -> String;
}

/// In-memory renderer doing one literal replace pass per token.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiteralRenderer;

impl LiteralRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for LiteralRenderer {
    fn render(&self, template: &str, tokens: &IndexMap<String, String>) -> String {
        tokens
            .iter()
            .fold(template.to_string(), |text, (key, value)| text.replace(&token(key), value))
    }
}
