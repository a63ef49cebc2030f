#[cfg(test)]
#[path = "../../tests/unit/checker/finish_test.rs"]
mod finish_test;

use crate::models::common::TimeInterval;
use crate::models::{Diagnostic, DiagnosticKind, RouteDescriptor};
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Checks that end location can be reached and served. `arrivals` are time ranges when the
/// vehicle can arrive at the end location. A finish window which only touches an end location
/// window leaves no time there, so it is reachable only when no time at end is required.
pub(crate) fn check_end_location(route: &RouteDescriptor, arrivals: &[TimeInterval]) -> Result<(), Diagnostic> {
    let Some(location) = route.end_location.as_ref() else {
        return Ok(());
    };

    let time_at_end = route.time_at_end;
    let windows = location.constrained_intervals();

    let longest = arrivals
        .iter()
        .map(|arrival| TimeInterval::new(arrival.start(), (arrival.end() + time_at_end).max(arrival.start())))
        .flat_map(|finish| {
            if windows.is_empty() {
                vec![Some(finish)]
            } else {
                windows.iter().map(|window| finish.intersect(window)).collect()
            }
        })
        .flatten()
        .max_by(|a, b| compare_floats(a.duration(), b.duration()));

    match longest {
        None => Err(unreachable_diagnostic(route)),
        Some(finish) if compare_floats(finish.duration(), 0.) == Ordering::Equal && time_at_end > 0. => {
            Err(unreachable_diagnostic(route))
        }
        Some(finish) if compare_floats(finish.start() + time_at_end, finish.end()) == Ordering::Greater => {
            let available = finish.duration();
            Err(Diagnostic::error(
                DiagnosticKind::FinishLocationCannotBeServiced { available, required: time_at_end },
                route.id.as_str(),
                format!(
                    "end location can be reached, but only {available} min of required {time_at_end} min are left to serve it"
                ),
            ))
        }
        Some(_) => Ok(()),
    }
}

fn unreachable_diagnostic(route: &RouteDescriptor) -> Diagnostic {
    Diagnostic::error(
        DiagnosticKind::FinishLocationUnreachable,
        route.id.as_str(),
        "end location cannot be reached within its time windows".to_string(),
    )
}
