use crate::constants::LOG_ENV;

/// Initialises env_logger from `CODEGEN_LOG`, defaulting to warnings only.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();
}
