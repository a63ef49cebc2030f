//! This module contains logic to check multiple routes at once.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::MultiFormatError;
use crate::format::report::Report;
use crate::format::route::PragmaticRoutes;
use feasibility_core::prelude::*;
use rayon::prelude::*;
use std::io::{BufReader, Read};

/// A result of a single route check.
#[derive(Clone, Debug)]
pub struct RouteCheck {
    /// Route id.
    pub id: String,
    /// Check summary.
    pub result: CheckResult,
    /// All diagnostics produced for the route.
    pub diagnostics: Vec<Diagnostic>,
}

/// Checks routes in parallel. Every route gets its own diagnostic sink, results keep the order
/// of routes.
pub fn check_routes(routes: &[RouteDescriptor], config: &CheckerConfig) -> Vec<RouteCheck> {
    config.environment.log(|| format!("checking {} routes", routes.len()));

    let checks = routes
        .par_iter()
        .map(|route| {
            let mut diagnostics = Vec::default();
            let result = check_route(route, config, &mut diagnostics);

            RouteCheck { id: route.id.clone(), result, diagnostics }
        })
        .collect::<Vec<_>>();

    config.environment.log(|| {
        let feasible = checks.iter().filter(|check| check.result.is_feasible()).count();
        format!("{feasible} of {} routes are feasible", checks.len())
    });

    checks
}

/// Reads routes in pragmatic json format, checks them and returns a report.
pub fn check_json<R: Read>(reader: BufReader<R>, config: &CheckerConfig) -> Result<Report, MultiFormatError> {
    let routes = reader.read_pragmatic().inspect_err(|errors| {
        config.environment.log(|| format!("routes have format errors: {}", errors.codes().join(", ")))
    })?;

    Ok(Report::from_checks(check_routes(routes.as_slice(), config).as_slice()))
}
