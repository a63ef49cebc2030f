#[cfg(test)]
#[path = "../../tests/unit/checker/duration_test.rs"]
mod duration_test;

use crate::models::common::{Duration, MINUTES_PER_DAY};
use crate::models::{Diagnostic, DiagnosticKind, LocationTimes, RouteDescriptor};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// A multiplier applied to estimated days when route duration is unlimited.
const UNLIMITED_DURATION_FACTOR: Float = 2.;

/// Days counted for a constrained location time window.
const CONSTRAINED_WINDOW_DAYS: u32 = 3;

/// Days counted for a wide-open location time window.
const WIDE_OPEN_WINDOW_DAYS: u32 = 1;

/// Estimates amount of days the route can span. The estimation is used only to substitute an
/// unlimited max duration with a value which never becomes the binding constraint.
pub fn estimate_days(route: &RouteDescriptor) -> u32 {
    let breaks = route
        .breaks
        .iter()
        .filter_map(|break_| break_.as_time_window())
        .map(|window| if window.day > 0 { window.day } else { 1 })
        .sum::<u32>();

    let location_days = |location: &LocationTimes| {
        location
            .windows()
            .map(|window| if window.is_wide_open() { WIDE_OPEN_WINDOW_DAYS } else { CONSTRAINED_WINDOW_DAYS })
            .sum::<u32>()
    };

    let locations = route.start_location.iter().chain(route.end_location.iter()).map(location_days).sum::<u32>();

    breaks + locations
}

/// Returns max total duration of the route used by the check: either the specified one or,
/// if it is zero (unlimited), an estimation based on amount of days the route can span.
pub fn get_effective_max_duration(route: &RouteDescriptor) -> Duration {
    if compare_floats(route.max_total_duration, 0.) == Ordering::Equal {
        UNLIMITED_DURATION_FACTOR * estimate_days(route) as Float * MINUTES_PER_DAY
    } else {
        route.max_total_duration
    }
}

/// Checks that max duration can fit time spent at start and end locations.
pub(crate) fn check_max_duration(route: &RouteDescriptor, max_duration: Duration) -> Result<(), Diagnostic> {
    let required = route.effective_time_at_start() + route.effective_time_at_end();

    if max_duration < required {
        Err(Diagnostic::error(
            DiagnosticKind::MaxDurationTooSmall { max_duration, required },
            route.id.as_str(),
            format!(
                "max total duration ({max_duration} min) is less than time at start and end locations ({required} min)"
            ),
        ))
    } else {
        Ok(())
    }
}
