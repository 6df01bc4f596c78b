mod config; pub use config::*;
mod error; pub use error::*;
mod logger; pub use logger::*;
mod msg_fmt; pub use msg_fmt::*;
mod pipeline; pub use pipeline::*;
mod rotation; pub use rotation::*;
mod targets; pub use targets::*;
mod writer;
mod logger_macro;

use std::sync::{Arc, OnceLock};

static LOGGER: OnceLock<Arc<ProcessLogger>> = OnceLock::new();

/// Returns the process-wide logger, building and starting it on first use.
///
/// Only the very first call's configuration is used; later configurations are
/// ignored and the existing instance is returned.
pub fn get_instance(config: Option<LoggerConfig>) -> Arc<ProcessLogger> {
    global(config).clone()
}

fn global(config: Option<LoggerConfig>) -> &'static Arc<ProcessLogger> {
    LOGGER.get_or_init(|| {
        let logger = ProcessLogger::new(config.unwrap_or_default());
        if let Err(err) = logger.start() {
            eprintln!("Failed to start logger: {}", err);
        }
        Arc::new(logger)
    })
}

pub fn log(message: impl Into<String>,
           level: impl AsRef<str>
) -> Result<(), LoggerError> {
    global(None).log(message, level)
}

pub fn flush() -> Result<(), LoggerError> {
    global(None).flush()
}

pub fn shutdown() {
    global(None).shutdown();
}

pub fn is_logger_running() -> bool {
    LOGGER.get().is_some_and(|logger| logger.is_running())
}
