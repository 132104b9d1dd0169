//! Layered run configuration for codegen.
//! Built-in defaults are overridden by the user configuration file, which is
//! in turn overridden by `-key=value` command-line flags. Each layer replaces
//! values key for key; there is no deep merge.

use crate::constants::{USER_CONFIG_ENV, USER_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::parser::{parse_config_file, Properties};
use chrono::Datelike;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};

/// Variant rendered when none is configured.
pub const DEFAULT_VARIANT: &str = "default";

/// The effective configuration of one run, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub lang: String,
    pub license: String,
    pub name: String,
    pub email: String,
    pub path: PathBuf,
    pub header_path: Option<PathBuf>,
    /// True unless `ignore-header` is exactly `no`.
    pub ignore_header: bool,
    /// True unless `ignore-source` is exactly `no`.
    pub ignore_source: bool,
    pub year: String,
    pub variants: Vec<String>,
    tokens: Properties,
}

impl Config {
    /// Types a fully merged property map. Known keys missing from `properties`
    /// fall back to the built-in defaults.
    pub fn from_properties(properties: Properties) -> Self {
        let mut tokens = default_properties();
        merge(&mut tokens, properties);

        let value = |key: &str| tokens.get(key).cloned().unwrap_or_default();

        Self {
            lang: value("lang"),
            license: value("license"),
            name: value("name"),
            email: value("email"),
            path: PathBuf::from(value("path")),
            header_path: tokens.get("header-path").map(PathBuf::from),
            ignore_header: value("ignore-header") != "no",
            ignore_source: value("ignore-source") != "no",
            year: value("year"),
            variants: split_variants(&value("variants")),
            tokens,
        }
    }

    /// Every merged key, including ones only templates know about.
    pub fn tokens(&self) -> &Properties {
        &self.tokens
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(String::as_str)
    }

    /// Directory headers are written to, `header-path` falling back to `path`.
    pub fn header_dir(&self) -> &Path {
        self.header_path.as_deref().unwrap_or(&self.path)
    }
}

/// A parsed command line: the configuration plus the requested file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config: Config,
    pub files: Vec<String>,
}

/// Built-in defaults, the lowest-precedence layer.
pub fn default_properties() -> Properties {
    let year = chrono::Local::now().year().to_string();
    [
        ("lang", "c"),
        ("license", "MIT"),
        ("name", "Unknown"),
        ("email", ""),
        ("path", "."),
        ("ignore-header", "no"),
        ("ignore-source", "no"),
        ("year", year.as_str()),
        ("variants", DEFAULT_VARIANT),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// Applies `layer` over `base`; keys in `layer` win.
pub fn merge(base: &mut Properties, layer: Properties) {
    base.extend(layer);
}

/// Splits a comma separated variant list, trimming spaces and tabs.
/// An empty list yields the default variant.
pub fn split_variants(value: &str) -> Vec<String> {
    let variants: Vec<String> = value
        .split(',')
        .map(|variant| variant.trim_matches([' ', '\t']))
        .filter(|variant| !variant.is_empty())
        .map(str::to_string)
        .collect();

    if variants.is_empty() {
        vec![DEFAULT_VARIANT.to_string()]
    } else {
        variants
    }
}

/// Parses a single `-key=value` flag, splitting on the first `=`.
///
/// # Errors
/// * `Error::ArgumentError` if there is no `=` or the key is empty
pub fn parse_argument(argument: &str) -> Result<(String, String)> {
    let invalid = || Error::ArgumentError { argument: argument.to_string() };
    let flag = argument.strip_prefix('-').ok_or_else(invalid)?;
    let (key, value) = flag.split_once('=').ok_or_else(invalid)?;
    if key.is_empty() {
        return Err(invalid());
    }
    Ok((key.to_string(), value.to_string()))
}

/// Separates flags from file requests, keeping the order of both.
pub fn split_arguments<S: AsRef<str>>(arguments: &[S]) -> Result<(Properties, Vec<String>)> {
    let mut flags = Properties::new();
    let mut files = Vec::new();

    for argument in arguments {
        let argument = argument.as_ref();
        if argument.starts_with('-') {
            let (key, value) = parse_argument(argument)?;
            flags.insert(key, value);
        } else {
            files.push(argument.to_string());
        }
    }

    Ok((flags, files))
}

/// Location of the user configuration file: `CODEGEN_CONFIG`, or
/// `.codegen` in the home directory.
pub fn user_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(USER_CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(USER_CONFIG_FILE)).ok_or_else(|| {
        Error::ResourceNotFoundError {
            path: format!("~/{USER_CONFIG_FILE}"),
            source: io::Error::new(io::ErrorKind::NotFound, "home directory is unknown"),
        }
    })
}

/// Builds the effective configuration from the defaults, the user
/// configuration file and the command-line arguments, in that order.
/// Flags are validated before the user configuration file is read.
///
/// # Errors
/// * `Error::ResourceNotFoundError` if the user configuration file is missing
/// * `Error::ConfigSyntaxError` if it contains a malformed property
/// * `Error::ArgumentError` for a malformed flag
pub fn build_config<S: AsRef<str>, P: AsRef<Path>>(
    arguments: &[S],
    user_config: P,
) -> Result<Invocation> {
    let (flags, files) = split_arguments(arguments)?;
    let mut properties = default_properties();

    let home = parse_config_file(user_config.as_ref())?;
    if home.is_empty() {
        debug!("User configuration {} has no entries", user_config.as_ref().display());
    } else {
        debug!("Applying {} keys from {}", home.len(), user_config.as_ref().display());
        merge(&mut properties, home);
    }

    debug!("Applying {} keys from the command line", flags.len());
    merge(&mut properties, flags);

    Ok(Invocation { config: Config::from_properties(properties), files })
}
