#[cfg(test)]
#[path = "../../../tests/unit/format/route/reader_test.rs"]
mod reader_test;

use super::{Route, RouteBreak, RouteLocation, RoutePlan};
use crate::format::{FormatError, MultiFormatError};
use crate::parse_time;
use crate::validation::ValidationContext;
use feasibility_core::models::common::{TimeWindow, Timestamp};
use feasibility_core::models::{Break, LocationTimes, RouteBuilder, RouteDescriptor};

/// Validates routes and converts them into core route descriptors keeping their order.
pub fn map_to_routes(plan: &RoutePlan) -> Result<Vec<RouteDescriptor>, MultiFormatError> {
    ValidationContext::new(plan).validate()?;

    plan.routes.iter().map(map_route).collect::<Result<Vec<_>, _>>().map_err(MultiFormatError::from)
}

fn map_route(route: &Route) -> Result<RouteDescriptor, FormatError> {
    let id = route.id.as_str();
    let shift = &route.shift;

    let start_time_window = TimeWindow::new_with_day(
        map_time(id, shift.start.as_str())?,
        map_time(id, shift.end.as_str())?,
        shift.day.unwrap_or(0),
    );

    let breaks = route.breaks.iter().flatten().map(|break_| map_break(id, break_)).collect::<Result<Vec<_>, _>>()?;

    let mut builder = RouteBuilder::new(id)
        .with_start_time_window(start_time_window)
        .with_max_total_duration(route.max_duration.unwrap_or(0.))
        .add_breaks(breaks);

    if let Some(start) = route.start.as_ref() {
        builder =
            builder.with_start_location(map_location(id, start)?).with_time_at_start(start.duration.unwrap_or(0.));
    }

    if let Some(end) = route.end.as_ref() {
        builder = builder.with_end_location(map_location(id, end)?).with_time_at_end(end.duration.unwrap_or(0.));
    }

    Ok(builder.build())
}

fn map_location(route_id: &str, location: &RouteLocation) -> Result<LocationTimes, FormatError> {
    let windows = location
        .times
        .iter()
        .flatten()
        .map(|time| map_time_window(route_id, time.as_slice(), 0))
        .collect::<Result<Vec<_>, _>>()?;

    match windows.as_slice() {
        [] => Ok(LocationTimes::wide_open()),
        [window] => Ok(LocationTimes::new(window.clone())),
        [window1, window2] => Ok(LocationTimes::new_with_windows(window1.clone(), window2.clone())),
        _ => Err(FormatError::new(
            "E1002".to_string(),
            "too many location time windows".to_string(),
            format!("specify at most two time windows for locations of route '{route_id}'"),
        )),
    }
}

fn map_break(route_id: &str, break_: &RouteBreak) -> Result<Break, FormatError> {
    match break_ {
        RouteBreak::TimeWindow { time: Some(time), duration: Some(duration), day } => {
            Ok(Break::time_window(map_time_window(route_id, time.as_slice(), day.unwrap_or(0))?, *duration))
        }
        RouteBreak::DriveTime { interval: Some(interval), duration: Some(duration) } => {
            Ok(Break::drive_time(*interval, *duration))
        }
        RouteBreak::WorkTime { interval: Some(interval), duration: Some(duration) } => {
            Ok(Break::work_time(*interval, *duration))
        }
        _ => Err(FormatError::new(
            "E1004".to_string(),
            "break misses required fields".to_string(),
            format!("specify all fields required by break type in route '{route_id}'"),
        )),
    }
}

fn map_time_window(route_id: &str, time: &[String], day: u32) -> Result<TimeWindow, FormatError> {
    match time {
        [start, end] => Ok(TimeWindow::new_with_day(map_time(route_id, start)?, map_time(route_id, end)?, day)),
        _ => Err(FormatError::new_with_details(
            "E1001".to_string(),
            "invalid time window".to_string(),
            format!("specify time windows of route '{route_id}' as two time values"),
            format!("got {} values", time.len()),
        )),
    }
}

fn map_time(route_id: &str, time: &str) -> Result<Timestamp, FormatError> {
    parse_time(time).map_err(|err| {
        FormatError::new_with_details(
            "E1001".to_string(),
            "invalid time format".to_string(),
            format!("use 'HH:MM' time format in route '{route_id}'"),
            err.to_string(),
        )
    })
}
