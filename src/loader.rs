//! Loading of support data resources into mutable text buffers.
//! The support root holds license templates, language definitions and
//! per-language templates; it is read-only for the whole run.
use crate::constants::{
    DEFAULT_SUPPORT_ROOT, DEFINITIONS_FILE, LANGUAGES_DIR, LICENSES_DIR, SUPPORT_ROOT_ENV,
};
use crate::error::{Error, Result};
use crate::renderer::{token, TemplateRenderer};
use crate::writer::OutputWriter;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only store of support resources, keyed by paths relative to its root.
#[derive(Debug, Clone)]
pub struct SupportRoot {
    root: PathBuf,
}

impl SupportRoot {
    /// Opens an existing support root.
    ///
    /// # Errors
    /// * `Error::SupportRootNotFoundError` if `root` is not a directory
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::SupportRootNotFoundError { root: root.display().to_string() });
        }
        Ok(Self { root })
    }

    /// Opens the root named by `CODEGEN_ROOT`, or the default location.
    pub fn from_env() -> Result<Self> {
        let root = std::env::var_os(SUPPORT_ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SUPPORT_ROOT));
        Self::open(root)
    }

    /// Absolute location of a resource.
    pub fn resolve<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }

    /// Loads a resource into a fresh buffer.
    ///
    /// # Errors
    /// * `Error::ResourceNotFoundError` if the resource is missing or unreadable
    pub fn load<P: AsRef<Path>>(&self, relative: P) -> Result<TemplateBuffer> {
        let path = self.resolve(relative);
        debug!("Loading resource {}", path.display());
        let data = fs::read_to_string(&path).map_err(|source| Error::ResourceNotFoundError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(TemplateBuffer::new(data))
    }

    /// `templates/licenses/<LICENSE>`, the license name upper-cased.
    pub fn license_template(license: &str) -> PathBuf {
        Path::new(LICENSES_DIR).join(license.to_uppercase())
    }

    /// `templates/languages/<lang>/definitions`.
    pub fn definitions(language: &str) -> PathBuf {
        Path::new(LANGUAGES_DIR).join(language).join(DEFINITIONS_FILE)
    }

    /// `templates/languages/<lang>/<variant>.<extension>`.
    pub fn language_template(language: &str, variant: &str, extension: &str) -> PathBuf {
        Path::new(LANGUAGES_DIR).join(language).join(format!("{variant}.{extension}"))
    }
}

/// Text of one loaded resource, owned by whoever loaded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBuffer {
    data: String,
}

impl TemplateBuffer {
    pub fn new<S: Into<String>>(data: S) -> Self {
        Self { data: data.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }

    /// Replaces every occurrence of `pattern` with `replacement`.
    pub fn substitute(&mut self, pattern: &str, replacement: &str) {
        if !pattern.is_empty() {
            self.data = self.data.replace(pattern, replacement);
        }
    }

    /// Replaces `%%KEY%%` with `value`. Absent tokens are a no-op.
    pub fn apply_token(&mut self, key: &str, value: &str) {
        self.substitute(&token(key), value);
    }

    /// Applies every entry of `tokens` through `renderer`.
    pub fn apply_tokens(
        &mut self,
        renderer: &dyn TemplateRenderer,
        tokens: &IndexMap<String, String>,
    ) {
        self.data = renderer.render(&self.data, tokens);
    }

    /// Turns the whole buffer into line comments using `comment`.
    pub fn comment_out(&mut self, comment: &str) {
        let prefix = format!("{comment} ");
        self.substitute("\n", &format!("\n{prefix}"));
        self.data.insert_str(0, &prefix);
    }

    /// Inserts `text` and a line break before the existing content.
    pub fn prepend_line(&mut self, text: &str) {
        self.data.insert(0, '\n');
        self.data.insert_str(0, text);
    }

    /// Writes the buffer verbatim to `path`.
    ///
    /// # Errors
    /// * `Error::WriteError` if the destination cannot be written
    pub fn export(&self, writer: &dyn OutputWriter, path: &Path) -> Result<()> {
        debug!("Exporting {} bytes to {}", self.data.len(), path.display());
        writer.write(path, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(
            SupportRoot::license_template("mit"),
            PathBuf::from("templates/licenses/MIT")
        );
        assert_eq!(
            SupportRoot::definitions("c"),
            PathBuf::from("templates/languages/c/definitions")
        );
        assert_eq!(
            SupportRoot::language_template("c", "default", "h"),
            PathBuf::from("templates/languages/c/default.h")
        );
    }

    #[test]
    fn test_comment_out() {
        let mut buffer = TemplateBuffer::new("Copyright\nAll rights\n");
        buffer.comment_out("//");
        assert_eq!(buffer.as_str(), "// Copyright\n// All rights\n// ");
    }

    #[test]
    fn test_prepend_line() {
        let mut buffer = TemplateBuffer::new("print()\n");
        buffer.prepend_line("#!/usr/bin/env python");
        assert_eq!(buffer.as_str(), "#!/usr/bin/env python\nprint()\n");
    }

    #[test]
    fn test_apply_token_is_case_insensitive_on_key() {
        let mut buffer = TemplateBuffer::new("#ifndef %%INCLUDE_GUARD%%");
        buffer.apply_token("include_guard", "FOO");
        buffer.apply_token("missing", "ignored");
        assert_eq!(buffer.as_str(), "#ifndef FOO");
    }
}
