//! Checker configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/config_test.rs"]
mod config_test;

use feasibility_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A checker configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies checker configuration.
    pub checker: Option<CheckerSettings>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// Specifies checker behavior.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckerSettings {
    /// Treats any single negative duration as a route contract violation. Default is false.
    pub strict_preconditions: Option<bool>,
}

/// A telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies a prefix of every log message.
    pub prefix: Option<String>,
}

impl Config {
    /// Returns true if strict preconditions are requested.
    pub fn is_strict(&self) -> bool {
        self.checker.as_ref().and_then(|checker| checker.strict_preconditions).unwrap_or(false)
    }

    /// Returns logging configuration if logging is enabled.
    pub fn logging(&self) -> Option<&LoggingConfig> {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).filter(|logging| logging.enabled)
    }
}

/// Creates a logger which writes messages to stderr.
pub fn create_logger(prefix: Option<String>) -> InfoLogger {
    let prefix = prefix.unwrap_or_default();

    Arc::new(move |msg: &str| eprintln!("{prefix}{msg}"))
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a checker config. Command line flags can only enable strict mode and logging on top of
/// config values.
pub fn create_checker_config(config: &Config, is_strict: bool, is_logging: bool) -> CheckerConfig {
    let builder = CheckerConfigBuilder::default().with_strict_preconditions(is_strict || config.is_strict());

    let logger = match (config.logging(), is_logging) {
        (Some(logging), _) => Some(create_logger(logging.prefix.clone())),
        (None, true) => Some(create_logger(None)),
        (None, false) => None,
    };

    let builder = match logger {
        Some(logger) => builder.with_logger(logger),
        None => builder,
    };

    builder.build()
}
