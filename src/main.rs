//! codegen's entry point.
//! Captures arguments, builds the layered configuration, loads the language
//! definition and hands everything to the processor.

use codegen::{
    cli::{get_args, get_command, help_text, Args, Command},
    definitions::LanguageDefinition,
    error::{default_error_handler, Result},
    loader::SupportRoot,
    logger::init_logger,
    processor::Processor,
    renderer::LiteralRenderer,
    writer::LocalWriter,
};

/// Main application entry point.
fn main() {
    init_logger();

    match get_args().and_then(run) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic execution.
///
/// # Returns
/// * `Result<bool>` - Whether every requested file was written
///
/// # Flow
/// 1. Prints help and stops when there are no arguments
/// 2. Builds the configuration from defaults, user file and flags
/// 3. Opens the support root and loads the language definition
/// 4. Generates every variant of every requested file
fn run(args: Args) -> Result<bool> {
    let invocation = match get_command(args)? {
        Command::Help => {
            let root = SupportRoot::from_env().ok();
            print!("{}", help_text(root.as_ref()));
            return Ok(true);
        }
        Command::Generate(invocation) => invocation,
    };

    let root = SupportRoot::from_env()?;
    let definition = LanguageDefinition::load(&root, &invocation.config.lang)?;

    let renderer = LiteralRenderer::new();
    let writer = LocalWriter::new();
    let processor = Processor::new(&root, &renderer, &writer, &invocation.config, &definition);

    let report = processor.generate(&invocation.files)?;
    if !report.is_success() {
        eprintln!(
            "{} of {} files could not be written.",
            report.failed.len(),
            report.failed.len() + report.written.len()
        );
    }
    Ok(report.is_success())
}
