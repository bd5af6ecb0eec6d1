//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence; `filter` applies when it is unset. Only
/// binaries should call this, the library itself only emits through `log`.
pub fn init_with_default(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
