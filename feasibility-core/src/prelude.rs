//! This module reimports commonly used types.

pub use crate::checker::{CheckResult, CheckerConfig, CheckerConfigBuilder, check_route};

pub use crate::models::common::{Duration, TimeInterval, TimeWindow, Timestamp};
pub use crate::models::{Break, BreakKind, LocationTimes, RouteBuilder, RouteDescriptor};
pub use crate::models::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity};

pub use crate::utils::{Environment, Float, GenericError, GenericResult, InfoLogger, compare_floats};
