//! This module contains the route feasibility checker: a sequence of phases which decide
//! whether a route can be started, whether every break can be taken in time and whether the
//! end location can be reached and served.
//!
//! The checker is a plain function: every call works on its own snapshot of the route, so
//! independent routes can be checked concurrently.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

mod breaks;
pub use self::breaks::*;

mod duration;
pub use self::duration::*;

mod finish;
use self::finish::check_end_location;

mod rules;
pub use self::rules::validate_break_rules;

mod trip;
pub use self::trip::*;

mod walk;
pub use self::walk::*;

use crate::models::{Diagnostic, DiagnosticKind, DiagnosticSink, RouteDescriptor};
use crate::utils::{Environment, InfoLogger};

/// Specifies checker behavior.
#[derive(Clone, Debug, Default)]
pub struct CheckerConfig {
    /// When set, any single negative value among time at start, time at end and max total
    /// duration violates the route contract. By default, only all three being negative does.
    pub strict_preconditions: bool,
    /// An environment used to log check progress.
    pub environment: Environment,
}

/// Provides the way to build [`CheckerConfig`].
#[derive(Default)]
pub struct CheckerConfigBuilder {
    config: CheckerConfig,
}

impl CheckerConfigBuilder {
    /// Sets strict preconditions mode.
    pub fn with_strict_preconditions(mut self, is_strict: bool) -> Self {
        self.config.strict_preconditions = is_strict;
        self
    }

    /// Sets environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Sets a logger which receives check progress messages.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.config.environment = Environment::new(logger);
        self
    }

    /// Builds a config.
    pub fn build(self) -> CheckerConfig {
        self.config
    }
}

/// A summary of a single route check.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckResult {
    /// The route can be driven.
    Feasible,
    /// The route cannot be driven: the kind of the first blocking failure.
    Infeasible(DiagnosticKind),
    /// The route passed all feasibility phases, but its break list violates break rules,
    /// so breaks were not checked: the kind of the first rule error.
    Invalid(DiagnosticKind),
}

impl CheckResult {
    /// Returns true if the route is feasible.
    pub fn is_feasible(&self) -> bool {
        matches!(self, CheckResult::Feasible)
    }
}

/// Keeps per call state of the check.
struct CheckContext<'a, S: DiagnosticSink + ?Sized> {
    route: &'a RouteDescriptor,
    config: &'a CheckerConfig,
    sink: &'a mut S,
}

impl<S: DiagnosticSink + ?Sized> CheckContext<'_, S> {
    fn log<F: FnOnce() -> String>(&self, message_fn: F) {
        self.config.environment.log(|| format!("route '{}': {}", self.route.id, message_fn()));
    }

    fn fail(&mut self, diagnostic: Diagnostic) -> CheckResult {
        self.log(|| format!("failed with {}: {}", diagnostic.kind.code(), diagnostic.message));

        let kind = diagnostic.kind.clone();
        self.sink.accept(diagnostic);

        CheckResult::Infeasible(kind)
    }
}

/// Checks whether the route can be driven. Writes zero or more diagnostics into the sink and
/// returns a summary.
///
/// Panics if the route violates its contract: negative durations (see
/// [`CheckerConfig::strict_preconditions`]) or a wide-open route start time window.
pub fn check_route<S: DiagnosticSink + ?Sized>(
    route: &RouteDescriptor,
    config: &CheckerConfig,
    sink: &mut S,
) -> CheckResult {
    check_preconditions(route, config);

    let mut ctx = CheckContext { route, config, sink };

    let rule_diagnostics = validate_break_rules(route);
    let rule_error = rule_diagnostics.iter().find(|diagnostic| diagnostic.is_error()).map(|d| d.kind.clone());
    rule_diagnostics.into_iter().for_each(|diagnostic| ctx.sink.accept(diagnostic));

    let max_duration = get_effective_max_duration(route);
    ctx.log(|| format!("effective max duration is {max_duration} min"));

    if let Err(diagnostic) = check_max_duration(route, max_duration) {
        return ctx.fail(diagnostic);
    }

    let trip_ranges = match get_trip_ranges(route, max_duration) {
        Ok(ranges) => ranges,
        Err(diagnostic) => return ctx.fail(diagnostic),
    };
    ctx.log(|| {
        let ranges = trip_ranges.iter().map(|range| range.to_string()).collect::<Vec<_>>();
        format!("trip ranges are {}", ranges.join(", "))
    });

    let arrivals = if route.has_time_window_breaks() && rule_error.is_none() {
        let sequence = BreakSequence::new(route.breaks.as_slice());
        let trip = select_trip_range(trip_ranges.as_slice(), &sequence);
        ctx.log(|| format!("walks {} breaks within {trip}", sequence.len()));

        let walk = walk_breaks(&sequence, &trip);
        walk.failures.iter().for_each(|failure| {
            ctx.log(|| {
                let index = sequence.original_index(failure.position);
                format!("{} break cannot be visited: {}", ordinal_name(index), failure.cause)
            })
        });

        match classify_walk(&walk, &sequence, route.id.as_str()) {
            Ok(arrival) => vec![arrival],
            Err(diagnostic) => return ctx.fail(diagnostic),
        }
    } else {
        trip_ranges
    };

    if let Err(diagnostic) = check_end_location(route, arrivals.as_slice()) {
        return ctx.fail(diagnostic);
    }

    match rule_error {
        Some(kind) => {
            ctx.log(|| "breaks were not checked due to break rule errors".to_string());
            CheckResult::Invalid(kind)
        }
        None => {
            ctx.log(|| "is feasible".to_string());
            CheckResult::Feasible
        }
    }
}

/// Checks route contract. A violation is a programming error on the caller side.
fn check_preconditions(route: &RouteDescriptor, config: &CheckerConfig) {
    let negatives = [route.time_at_end, route.time_at_start, route.max_total_duration].map(|value| value < 0.);

    let is_violated =
        if config.strict_preconditions { negatives.iter().any(|&v| v) } else { negatives.iter().all(|&v| v) };

    assert!(
        !is_violated,
        "route '{}' has negative time at start ({}), time at end ({}) or max total duration ({})",
        route.id, route.time_at_start, route.time_at_end, route.max_total_duration
    );

    assert!(!route.start_time_window.is_wide_open(), "route '{}' start time window cannot be wide-open", route.id);
}
