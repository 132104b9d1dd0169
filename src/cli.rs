//! Command-line interface implementation for codegen.
//! Arguments are `-key=value` flags and bare file names. They are taken from
//! the process arguments verbatim, `--` included, and their meaning is decided
//! by the configuration layer; clap only renders the usage text.

use crate::config::{build_config, user_config_path, Invocation};
use crate::constants::HELP_FILE;
use crate::error::{Error, Result};
use crate::loader::SupportRoot;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Command-line arguments structure for codegen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "codegen: generate header and source files from language and license templates",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    override_usage = "codegen [-key=value ...] [filename ...]",
    after_help = "Common keys: lang, license, name, email, path, header-path, \
                  ignore-header, ignore-source, year, variants."
)]
pub struct Args {
    /// Configuration overrides (-key=value) and names of files to generate
    #[arg(value_name = "ARGS", num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub arguments: Vec<String>,
}

/// What a command line asks for.
#[derive(Debug)]
pub enum Command {
    /// No arguments at all.
    Help,
    Generate(Invocation),
}

impl Args {
    /// Captures arguments without interpreting them. clap's own parsing is
    /// bypassed because it would swallow a `--` separator.
    ///
    /// # Errors
    /// * `Error::ArgumentError` for an argument that is not valid UTF-8
    pub fn from_arguments<I, S>(arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let arguments = arguments
            .into_iter()
            .map(|argument| {
                argument.into().into_string().map_err(|raw| Error::ArgumentError {
                    argument: raw.to_string_lossy().into_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { arguments })
    }
}

/// Captures the process arguments, without the program name.
pub fn get_args() -> Result<Args> {
    Args::from_arguments(std::env::args_os().skip(1))
}

/// Decides what to do with the captured arguments. The configuration is only
/// built when there is at least one argument.
pub fn get_command(args: Args) -> Result<Command> {
    if args.arguments.is_empty() {
        return Ok(Command::Help);
    }
    let invocation = build_config(&args.arguments, user_config_path()?)?;
    Ok(Command::Generate(invocation))
}

/// Help text: the support root's `HELP` resource when available, otherwise
/// the generated usage.
pub fn help_text(root: Option<&SupportRoot>) -> String {
    root.and_then(|root| root.load(HELP_FILE).ok())
        .map(|help| help.into_string())
        .unwrap_or_else(|| Args::command().render_help().to_string())
}
