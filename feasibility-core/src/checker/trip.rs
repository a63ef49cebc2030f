#[cfg(test)]
#[path = "../../tests/unit/checker/trip_test.rs"]
mod trip_test;

use super::BreakSequence;
use crate::models::common::{Duration, TimeInterval};
use crate::models::{Diagnostic, DiagnosticKind, RouteDescriptor};
use crate::utils::compare_floats;

/// Returns trip ranges of the route: for every possible route start window, the range from the
/// earliest departure from the start location till the latest arrival at the end location.
///
/// Route start window is intersected with every constrained start location time window. If no
/// intersection exists, the route cannot be started. The range end is never before its start, even
/// when times at locations consume the whole max duration.
pub fn get_trip_ranges(route: &RouteDescriptor, max_duration: Duration) -> Result<Vec<TimeInterval>, Diagnostic> {
    let route_window = route.start_time_window.to_interval();

    let start_windows = match route.start_location.as_ref() {
        Some(location) if location.is_constrained() => location
            .constrained_intervals()
            .iter()
            .filter_map(|window| route_window.intersect(window))
            .collect::<Vec<_>>(),
        _ => vec![route_window],
    };

    if start_windows.is_empty() {
        return Err(Diagnostic::error(
            DiagnosticKind::StartLocationUnreachable,
            route.id.as_str(),
            format!("route start time window {route_window} doesn't intersect with start location time windows"),
        ));
    }

    let time_at_start = route.effective_time_at_start();
    let time_at_end = route.effective_time_at_end();

    Ok(start_windows
        .into_iter()
        .map(|window| {
            let departure = window.shift(time_at_start).start();
            let latest_arrival = (window.end() + max_duration - time_at_end).max(departure);

            TimeInterval::new(departure, latest_arrival)
        })
        .collect())
}

/// Selects a trip range to walk breaks within: among ranges which intersect the first break
/// window, the one which ends latest when clamped by that window end. This leaves the biggest
/// slack before the first break. If no range intersects the first break, the latest one is
/// selected.
///
/// Panics if `ranges` is empty.
pub fn select_trip_range(ranges: &[TimeInterval], sequence: &BreakSequence) -> TimeInterval {
    let first_window = sequence.get(0).and_then(|break_| break_.as_time_window()).map(|window| window.to_interval());

    first_window
        .and_then(|first| get_latest(ranges.iter().filter(|range| range.intersects(&first)), Some(&first)))
        .or_else(|| get_latest(ranges.iter(), None))
        .unwrap_or_else(|| panic!("trip ranges cannot be empty"))
}

fn get_latest<'a>(ranges: impl Iterator<Item = &'a TimeInterval>, cap: Option<&TimeInterval>) -> Option<TimeInterval> {
    let clamped_end = |range: &TimeInterval| cap.map_or(range.end(), |cap| range.end().min(cap.end()));

    ranges.max_by(|a, b| compare_floats(clamped_end(a), clamped_end(b))).copied()
}
