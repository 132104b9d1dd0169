//! Error handling for codegen.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while building the configuration or generating files.
///
/// Every variant that relates to a resource carries the path that was involved,
/// so the operator-facing message identifies what was missing.
#[derive(Error, Debug)]
pub enum Error {
    /// The support data directory holding templates and definitions is absent.
    #[error("Expected the support directory '{root}' to exist. Please ensure it does and that it has the correct data inside.")]
    SupportRootNotFoundError { root: String },

    /// A configuration, definition or template resource could not be read.
    #[error("Could not read '{path}': {source}.")]
    ResourceNotFoundError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A property line in a configuration resource has no `=`.
    #[error("Malformed property in '{path}' at line {line}: '{content}'.")]
    ConfigSyntaxError { path: String, line: usize, content: String },

    /// A command-line flag is not of the form `-key=value`.
    #[error("Invalid argument '{argument}', expected -key=value.")]
    ArgumentError { argument: String },

    /// The language definition lacks a key the generator depends on.
    #[error("Definitions for language '{language}' are missing the '{key}' key.")]
    DefinitionError { language: String, key: String },

    /// No license template exists for the requested license.
    #[error("Unknown license '{license}', no template found at '{path}'.")]
    UnknownLicenseError { license: String, path: String },

    /// No template exists for a variant/language/extension combination.
    #[error("Template '{path}' does not exist.")]
    TemplateNotFoundError { path: String },

    /// A generated file could not be written.
    #[error("Failed to write '{path}': {source}.")]
    WriteError {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
