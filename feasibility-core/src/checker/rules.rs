#[cfg(test)]
#[path = "../../tests/unit/checker/rules_test.rs"]
mod rules_test;

use super::ordinal_name;
use crate::models::common::TimeInterval;
use crate::models::{BreakKind, Diagnostic, DiagnosticKind, RouteDescriptor};
use crate::utils::compare_floats;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Validates route break list on rules which don't depend on the route schedule. Errors found
/// here disable the break feasibility walk.
pub fn validate_break_rules(route: &RouteDescriptor) -> Vec<Diagnostic> {
    check_break_kinds(route)
        .into_iter()
        .chain(check_break_durations(route))
        .chain(check_break_time_windows(route))
        .chain(check_break_intervals(route))
        .collect()
}

/// Checks that all breaks have the same kind.
fn check_break_kinds(route: &RouteDescriptor) -> Option<Diagnostic> {
    let mut kinds = route.breaks.iter().map(|break_| break_.kind_name()).collect::<Vec<_>>();
    kinds.sort_unstable();
    kinds.dedup();

    if kinds.len() > 1 {
        Some(Diagnostic::error(
            DiagnosticKind::MixedBreakKinds,
            route.id.as_str(),
            format!("route has breaks of different kinds: {}", kinds.join(", ")),
        ))
    } else {
        None
    }
}

/// Checks that break durations are positive. A zero duration break is only reported as warning.
fn check_break_durations(route: &RouteDescriptor) -> Vec<Diagnostic> {
    route
        .breaks
        .iter()
        .enumerate()
        .filter_map(|(index, break_)| {
            let kind = DiagnosticKind::InvalidBreakDuration { index };
            let ordinal = ordinal_name(index);

            if break_.duration < 0. {
                Some(Diagnostic::error(kind, route.id.as_str(), format!("the {ordinal} break has negative duration")))
            } else if compare_floats(break_.duration, 0.) == Ordering::Equal {
                Some(Diagnostic::warning(kind, route.id.as_str(), format!("the {ordinal} break has zero duration")))
            } else {
                None
            }
        })
        .collect()
}

/// Checks that time windows of chronologically adjacent breaks don't overlap. Windows which
/// only touch each other are allowed.
fn check_break_time_windows(route: &RouteDescriptor) -> Vec<Diagnostic> {
    let mut windows = route
        .breaks
        .iter()
        .enumerate()
        .filter_map(|(index, break_)| match &break_.kind {
            BreakKind::TimeWindow { window } if !window.is_wide_open() => Some((index, window.to_interval())),
            _ => None,
        })
        .collect::<Vec<(usize, TimeInterval)>>();

    windows.sort_by(|(_, a), (_, b)| compare_floats(a.start(), b.start()));

    windows
        .windows(2)
        .filter_map(|pair| match pair {
            [(other, previous), (index, current)] if previous.end() > current.start() => Some(Diagnostic::error(
                DiagnosticKind::OverlappingBreakWindows { index: *index, other: *other },
                route.id.as_str(),
                format!(
                    "time window of the {} break overlaps with time window of the {} break",
                    ordinal_name(*index),
                    ordinal_name(*other)
                ),
            )),
            _ => None,
        })
        .collect()
}

/// Checks that drive time and work time breaks have distinct intervals.
fn check_break_intervals(route: &RouteDescriptor) -> Vec<Diagnostic> {
    let mut seen = FxHashMap::<(&str, u64), usize>::default();

    route
        .breaks
        .iter()
        .enumerate()
        .filter_map(|(index, break_)| match &break_.kind {
            BreakKind::DriveTime { interval } | BreakKind::WorkTime { interval } => {
                Some((index, (break_.kind_name(), interval.to_bits())))
            }
            BreakKind::TimeWindow { .. } => None,
        })
        .filter_map(|(index, key)| {
            let other = *seen.entry(key).or_insert(index);
            (other != index).then(|| {
                Diagnostic::error(
                    DiagnosticKind::DuplicateBreakInterval { index, other },
                    route.id.as_str(),
                    format!(
                        "the {} break has the same interval as the {} break",
                        ordinal_name(index),
                        ordinal_name(other)
                    ),
                )
            })
        })
        .collect()
}
