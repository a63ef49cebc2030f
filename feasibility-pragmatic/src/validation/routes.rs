#[cfg(test)]
#[path = "../../tests/unit/validation/routes_test.rs"]
mod routes_test;

use super::*;
use crate::parse_time;

/// Checks that routes have unique ids.
fn check_e1000_no_routes_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.routes().map(|route| &route.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1000".to_string(),
            "duplicated route ids".to_string(),
            format!("remove duplicated route ids: '{}'", ids.join(", ")),
        ))
    })
}

/// Checks that all times are specified in `HH:MM` format and time windows have two values.
fn check_e1001_time_format(ctx: &ValidationContext) -> Result<(), FormatError> {
    let is_valid_time = |time: &String| parse_time(time).is_ok();
    let is_valid_window = |window: &Vec<String>| window.len() == 2 && window.iter().all(is_valid_time);

    let route_ids = ctx
        .routes()
        .filter(|route| {
            let shift_times = [&route.shift.start, &route.shift.end];
            let location_windows =
                route.start.iter().chain(route.end.iter()).flat_map(|location| location.times.iter().flatten());
            let break_windows = route.breaks.iter().flatten().filter_map(|break_| match break_ {
                RouteBreak::TimeWindow { time, .. } => time.as_ref(),
                RouteBreak::DriveTime { .. } | RouteBreak::WorkTime { .. } => None,
            });

            !shift_times.into_iter().all(is_valid_time)
                || !location_windows.chain(break_windows).all(is_valid_window)
        })
        .map(|route| route.id.clone())
        .collect::<Vec<_>>();

    if route_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001".to_string(),
            "invalid time format".to_string(),
            format!("use 'HH:MM' format and two values per time window in routes: '{}'", route_ids.join(", ")),
        ))
    }
}

/// Checks that locations have at most two time windows.
fn check_e1002_location_time_windows_amount(ctx: &ValidationContext) -> Result<(), FormatError> {
    let route_ids = ctx
        .routes()
        .filter(|route| {
            route
                .start
                .iter()
                .chain(route.end.iter())
                .any(|location| location.times.as_ref().is_some_and(|times| times.len() > 2))
        })
        .map(|route| route.id.clone())
        .collect::<Vec<_>>();

    if route_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002".to_string(),
            "too many location time windows".to_string(),
            format!("specify at most two time windows per location in routes: '{}'", route_ids.join(", ")),
        ))
    }
}

/// Checks that durations are not negative.
fn check_e1003_no_negative_durations(ctx: &ValidationContext) -> Result<(), FormatError> {
    let route_ids = ctx
        .routes()
        .filter(|route| {
            let location_durations =
                route.start.iter().chain(route.end.iter()).filter_map(|location| location.duration);
            let break_durations = route.breaks.iter().flatten().flat_map(|break_| {
                let interval = match break_ {
                    RouteBreak::DriveTime { interval, .. } | RouteBreak::WorkTime { interval, .. } => *interval,
                    RouteBreak::TimeWindow { .. } => None,
                };

                break_.duration().into_iter().chain(interval)
            });

            location_durations.chain(route.max_duration).chain(break_durations).any(|duration| duration < 0.)
        })
        .map(|route| route.id.clone())
        .collect::<Vec<_>>();

    if route_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1003".to_string(),
            "negative duration".to_string(),
            format!("use non-negative durations and break intervals in routes: '{}'", route_ids.join(", ")),
        ))
    }
}

/// Checks that breaks have all fields required by their type.
fn check_e1004_break_required_fields(ctx: &ValidationContext) -> Result<(), FormatError> {
    let route_ids = ctx
        .routes()
        .filter(|route| {
            route.breaks.iter().flatten().any(|break_| match break_ {
                RouteBreak::TimeWindow { time, duration, .. } => time.is_none() || duration.is_none(),
                RouteBreak::DriveTime { interval, duration } | RouteBreak::WorkTime { interval, duration } => {
                    interval.is_none() || duration.is_none()
                }
            })
        })
        .map(|route| route.id.clone())
        .collect::<Vec<_>>();

    if route_ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1004".to_string(),
            "break misses required fields".to_string(),
            format!(
                "specify 'time' and 'duration' for time window breaks, 'interval' and 'duration' for drive and \
                 work time breaks in routes: '{}'",
                route_ids.join(", ")
            ),
        ))
    }
}

/// Validates routes.
pub fn validate_routes(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_no_routes_with_duplicate_ids(ctx),
        check_e1001_time_format(ctx),
        check_e1002_location_time_windows_amount(ctx),
        check_e1003_no_negative_durations(ctx),
        check_e1004_break_required_fields(ctx),
    ])
}
