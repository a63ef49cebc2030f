use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the checker.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences checker behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
    /// Whether the logger is expected to produce any output.
    pub is_logging_enabled: bool,
}

impl Environment {
    /// Creates an instance of `Environment` which sends messages to the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger, is_logging_enabled: true }
    }

    /// Creates an instance of `Environment` which drops every message.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_| {}), is_logging_enabled: false }
    }

    /// Sends a lazily built message to the logger when logging is enabled.
    pub fn log<F: FnOnce() -> String>(&self, message_fn: F) {
        if self.is_logging_enabled {
            (self.logger)(message_fn().as_str());
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::silent()
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").field("is_logging_enabled", &self.is_logging_enabled).finish()
    }
}
