#[cfg(test)]
#[path = "../../tests/unit/checker/walk_test.rs"]
mod walk_test;

use super::{BreakSequence, ordinal_name};
use crate::models::common::TimeInterval;
use crate::models::{Diagnostic, DiagnosticKind};
use std::fmt::{Display, Formatter};

/// Specifies why a break cannot be visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakFailureCause {
    /// Break window doesn't intersect with the time when the vehicle can start the break.
    NoStart,
    /// Break can be started, but cannot be finished within the trip.
    NoFinish,
    /// One of the previous breaks cannot be visited.
    PreviousBreak,
}

impl Display for BreakFailureCause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoStart => write!(f, "cannot be started within its time window"),
            Self::NoFinish => write!(f, "cannot be finished before the trip ends"),
            Self::PreviousBreak => write!(f, "a previous break cannot be visited"),
        }
    }
}

/// A break which cannot be visited.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakFailure {
    /// Chronological position of the break.
    pub position: usize,
    /// Failure cause.
    pub cause: BreakFailureCause,
}

/// A result of walking through the breaks of a route.
#[derive(Clone, Debug)]
pub struct BreakWalk {
    /// Breaks which cannot be visited, in chronological order.
    pub failures: Vec<BreakFailure>,
    /// A time range when the vehicle can continue the trip after the last break. `None` if any
    /// break cannot be visited.
    pub remaining: Option<TimeInterval>,
}

/// Walks through the breaks in chronological order. Every break starts within intersection of
/// its window and the time left after the previous break, and has to be finished within the trip.
/// Once a break cannot be visited, all later breaks cannot be visited either.
pub fn walk_breaks(sequence: &BreakSequence, trip: &TimeInterval) -> BreakWalk {
    let (failures, remaining) = sequence.iter().enumerate().fold(
        (Vec::default(), Some(*trip)),
        |(mut failures, running), (position, break_)| {
            let Some(running) = running else {
                failures.push(BreakFailure { position, cause: BreakFailureCause::PreviousBreak });
                return (failures, None);
            };

            let window = break_.as_time_window().map_or_else(TimeInterval::wide_open, |window| window.to_interval());

            let Some(start) = running.intersect(&window) else {
                failures.push(BreakFailure { position, cause: BreakFailureCause::NoStart });
                return (failures, None);
            };

            match start.shift(break_.duration).intersect(trip) {
                Some(finish) => (failures, Some(TimeInterval::new(finish.start(), trip.end()))),
                None => {
                    failures.push(BreakFailure { position, cause: BreakFailureCause::NoFinish });
                    (failures, None)
                }
            }
        },
    );

    BreakWalk { failures, remaining }
}

/// Converts break walk into a single diagnostic. Returns the remaining trip range if all breaks
/// can be visited.
pub fn classify_walk(walk: &BreakWalk, sequence: &BreakSequence, route_id: &str) -> Result<TimeInterval, Diagnostic> {
    match (walk.failures.first(), walk.remaining) {
        (Some(first), _) => Err(create_diagnostic(first.position, sequence, route_id)),
        (None, Some(remaining)) => Ok(remaining),
        (None, None) => unreachable!("break walk without failures must have remaining range"),
    }
}

fn create_diagnostic(position: usize, sequence: &BreakSequence, route_id: &str) -> Diagnostic {
    let index = sequence.original_index(position);
    let ordinal = ordinal_name(index);

    let (kind, message) = if sequence.len() == 1 {
        (DiagnosticKind::BreakCannotBeVisited { index }, "the break cannot be visited".to_string())
    } else if position == 0 {
        (DiagnosticKind::AllBreaksCannotBeVisited, "all breaks cannot be visited".to_string())
    } else if position + 1 == sequence.len() {
        (DiagnosticKind::LastBreakCannotBeVisited { index }, format!("the {ordinal} break cannot be visited"))
    } else {
        (
            DiagnosticKind::SubsequenceCannotBeVisited { index },
            format!("the {ordinal} break and all breaks after it cannot be visited"),
        )
    };

    Diagnostic::error(kind, route_id, message)
}
