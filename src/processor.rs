//! Generation of header/source files for every requested variant and file.
//! The license block is rendered and every needed template is read before the
//! first write. Each output then starts from a pristine copy of its template,
//! receives the per-file tokens followed by the configuration tokens, and is
//! exported to its destination directory.
use crate::config::Config;
use crate::definitions::LanguageDefinition;
use crate::error::{Error, Result};
use crate::loader::{SupportRoot, TemplateBuffer};
use crate::parser::Properties;
use crate::renderer::TemplateRenderer;
use crate::writer::OutputWriter;
use indexmap::IndexMap;
use log::{debug, error};
use regex::Regex;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("non-word pattern is valid"));

/// Replaces every run of non-word characters in `name` with `substitution`.
pub fn symbolicate(name: &str, substitution: &str) -> String {
    NON_WORD.replace_all(name, substitution).into_owned()
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Tokens derived from a single requested file name.
pub fn file_tokens(file: &str, license: &str) -> Properties {
    let mut tokens = Properties::new();
    tokens.insert("include_guard".to_string(), symbolicate(&file.to_uppercase(), "_"));
    tokens.insert("header".to_string(), format!("{file}.h"));
    tokens.insert("object_name".to_string(), symbolicate(&capitalize(file), ""));
    tokens.insert("license".to_string(), license.to_string());
    tokens
}

/// Which half of a header/source pair an output is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Header,
    Source,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Header => write!(f, "header"),
            OutputKind::Source => write!(f, "source"),
        }
    }
}

/// Outcome of a generation run. Write failures do not stop the run; they are
/// collected here instead.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<Error>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drives template rendering for one run.
pub struct Processor<'a> {
    root: &'a SupportRoot,
    renderer: &'a dyn TemplateRenderer,
    writer: &'a dyn OutputWriter,
    config: &'a Config,
    definition: &'a LanguageDefinition,
}

impl<'a> Processor<'a> {
    pub fn new(
        root: &'a SupportRoot,
        renderer: &'a dyn TemplateRenderer,
        writer: &'a dyn OutputWriter,
        config: &'a Config,
        definition: &'a LanguageDefinition,
    ) -> Self {
        Self { root, renderer, writer, config, definition }
    }

    /// Loads a resource, reporting a missing file with `missing` and passing
    /// other read failures through with their source.
    fn load_or(
        &self,
        relative: &Path,
        missing: impl FnOnce(String) -> Error,
    ) -> Result<TemplateBuffer> {
        self.root.load(relative).map_err(|e| match e {
            Error::ResourceNotFoundError { path, source }
                if source.kind() == io::ErrorKind::NotFound =>
            {
                missing(path)
            }
            other => other,
        })
    }

    /// Renders the license named by the configuration and comments it out
    /// with the language's comment token.
    ///
    /// # Errors
    /// * `Error::UnknownLicenseError` if no template exists for the license
    /// * `Error::ResourceNotFoundError` if it exists but cannot be read
    pub fn build_license(&self) -> Result<String> {
        let relative = SupportRoot::license_template(&self.config.license);
        let mut license = self.load_or(&relative, |path| Error::UnknownLicenseError {
            license: self.config.license.clone(),
            path,
        })?;
        license.apply_tokens(self.renderer, self.config.tokens());
        license.comment_out(&self.definition.comment);
        Ok(license.into_string())
    }

    /// Outputs produced for each file, with their extensions.
    ///
    /// # Errors
    /// * `Error::DefinitionError` if a header is wanted but the language
    ///   declares no `header-extension`
    pub fn outputs(&self) -> Result<Vec<(OutputKind, &'a str)>> {
        let definition: &'a LanguageDefinition = self.definition;
        let mut outputs = Vec::with_capacity(2);
        if !self.config.ignore_header && definition.has_header {
            let extension =
                definition.header_extension.as_deref().ok_or_else(|| Error::DefinitionError {
                    language: definition.language.clone(),
                    key: "header-extension".to_string(),
                })?;
            outputs.push((OutputKind::Header, extension));
        }
        if !self.config.ignore_source {
            outputs.push((OutputKind::Source, definition.source_extension.as_str()));
        }
        Ok(outputs)
    }

    /// Loads every template the run needs, keyed by its path relative to the
    /// support root.
    ///
    /// # Errors
    /// * `Error::TemplateNotFoundError` for the first missing template
    /// * `Error::ResourceNotFoundError` for a template that cannot be read
    pub fn load_templates(&self) -> Result<IndexMap<PathBuf, TemplateBuffer>> {
        let outputs = self.outputs()?;
        let mut templates = IndexMap::new();
        for variant in &self.config.variants {
            for (_, extension) in &outputs {
                let relative =
                    SupportRoot::language_template(&self.definition.language, variant, extension);
                if templates.contains_key(&relative) {
                    continue;
                }
                let template =
                    self.load_or(&relative, |path| Error::TemplateNotFoundError { path })?;
                templates.insert(relative, template);
            }
        }
        Ok(templates)
    }

    /// Renders one output from a pristine copy of its template.
    pub fn render(
        &self,
        kind: OutputKind,
        template: &TemplateBuffer,
        tokens: &Properties,
    ) -> TemplateBuffer {
        let mut buffer = template.clone();

        if kind == OutputKind::Source {
            if let Some(shebang) = &self.definition.shebang {
                buffer.prepend_line(&format!("#!{shebang}"));
            }
        }

        // Derived tokens go first: a same-named configuration key finds nothing left to replace.
        buffer.apply_tokens(self.renderer, tokens);
        buffer.apply_tokens(self.renderer, self.config.tokens());
        buffer
    }

    /// Destination of one output.
    pub fn target_path(&self, kind: OutputKind, file: &str, extension: &str) -> PathBuf {
        let dir = match kind {
            OutputKind::Header => self.config.header_dir(),
            OutputKind::Source => self.config.path.as_path(),
        };
        dir.join(format!("{file}.{extension}"))
    }

    /// Generates every variant of every requested file.
    ///
    /// # Errors
    /// * `Error::UnknownLicenseError`, `Error::TemplateNotFoundError`,
    ///   `Error::ResourceNotFoundError` or `Error::DefinitionError`, all
    ///   before anything is written
    ///
    /// Failed writes are logged and reported without stopping the run.
    pub fn generate<S: AsRef<str>>(&self, files: &[S]) -> Result<GenerationReport> {
        let outputs = self.outputs()?;
        let license = self.build_license()?;
        let templates = self.load_templates()?;

        let mut report = GenerationReport::default();

        for variant in &self.config.variants {
            for file in files {
                let file = file.as_ref();
                let tokens = file_tokens(file, &license);

                for (kind, extension) in &outputs {
                    let relative = SupportRoot::language_template(
                        &self.definition.language,
                        variant,
                        extension,
                    );
                    let template = templates.get(&relative).ok_or_else(|| {
                        Error::TemplateNotFoundError {
                            path: self.root.resolve(&relative).display().to_string(),
                        }
                    })?;

                    debug!("Rendering {kind} for '{file}' from variant '{variant}'");
                    let buffer = self.render(*kind, template, &tokens);
                    let target = self.target_path(*kind, file, extension);

                    match buffer.export(self.writer, &target) {
                        Ok(()) => {
                            println!("Creating '{}'", target.display());
                            report.written.push(target);
                        }
                        Err(e) => {
                            error!("{e}");
                            report.failed.push(e);
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolicate() {
        assert_eq!(symbolicate("My File!", "_"), "My_File_");
        assert_eq!(symbolicate("My File!", ""), "MyFile");
        assert_eq!(symbolicate("a--b..c", "_"), "a_b_c");
        assert_eq!(symbolicate("snake_case", ""), "snake_case");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("foo"), "Foo");
        assert_eq!(capitalize("fOO bar"), "Foo bar");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_file_tokens() {
        let tokens = file_tokens("my-widget", "// MIT");
        assert_eq!(tokens["include_guard"], "MY_WIDGET");
        assert_eq!(tokens["header"], "my-widget.h");
        assert_eq!(tokens["object_name"], "Mywidget");
        assert_eq!(tokens["license"], "// MIT");
    }
}
