//! codegen scaffolds source files: for each requested name it renders a
//! header/source pair from per-language templates, topped with a license
//! block, with values layered from defaults, the user configuration file and
//! command-line flags.

/// Command-line interface module for codegen
pub mod cli;

/// Layered run configuration (defaults, user file, flags)
pub mod config;

/// Common constants
pub mod constants;

/// Per-language definitions
pub mod definitions;

/// Error types and handling for codegen
pub mod error;

/// Support data resources and template buffers
pub mod loader;

/// Logger setup
pub mod logger;

/// Parser for the `key = value` configuration format
pub mod parser;

/// Variant and file fan-out, rendering and export
pub mod processor;

/// Token substitution backends
pub mod renderer;

/// Destinations for generated files
pub mod writer;
