//! Common constants used throughout codegen.

/// Support data root used when `CODEGEN_ROOT` is not set.
pub const DEFAULT_SUPPORT_ROOT: &str = "/usr/local/codegen";

/// Environment variable overriding the support data root.
pub const SUPPORT_ROOT_ENV: &str = "CODEGEN_ROOT";

/// Environment variable overriding the user configuration file.
pub const USER_CONFIG_ENV: &str = "CODEGEN_CONFIG";

/// Environment variable holding the env_logger filter.
pub const LOG_ENV: &str = "CODEGEN_LOG";

/// User configuration file name, relative to the home directory.
pub const USER_CONFIG_FILE: &str = ".codegen";

/// Help resource, relative to the support root.
pub const HELP_FILE: &str = "HELP";

/// Directory of license templates, relative to the support root.
pub const LICENSES_DIR: &str = "templates/licenses";

/// Directory of per-language templates, relative to the support root.
pub const LANGUAGES_DIR: &str = "templates/languages";

/// Name of the per-language definitions resource.
pub const DEFINITIONS_FILE: &str = "definitions";
