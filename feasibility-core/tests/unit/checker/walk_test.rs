use super::*;
use crate::helpers::models::*;
use crate::models::Break;

fn walk(trip: (f64, f64), breaks: &[Break]) -> BreakWalk {
    walk_breaks(&BreakSequence::new(breaks), &TimeInterval::new(trip.0, trip.1))
}

fn causes(walk: &BreakWalk) -> Vec<(usize, BreakFailureCause)> {
    walk.failures.iter().map(|failure| (failure.position, failure.cause)).collect()
}

#[test]
fn can_walk_all_breaks() {
    let result = walk((480., 660.), &[tw_break(hm(9, 0), hm(9, 30), 30.), tw_break(hm(10, 0), hm(10, 30), 30.)]);

    assert!(result.failures.is_empty());
    assert_eq!(result.remaining, Some(TimeInterval::new(630., 660.)));
}

#[test]
fn can_carry_earliest_finish_into_next_break() {
    let result = walk((480., 720.), &[tw_break(hm(9, 0), hm(10, 0), 45.), tw_break(hm(9, 30), hm(11, 0), 30.)]);

    assert!(result.failures.is_empty());
    assert_eq!(result.remaining, Some(TimeInterval::new(615., 720.)));
}

#[test]
fn can_mark_all_breaks_after_failed_one() {
    let result = walk(
        (480., 660.),
        &[tw_break(hm(7, 0), hm(7, 30), 30.), tw_break(hm(9, 0), hm(9, 30), 30.), tw_break(hm(10, 0), hm(10, 30), 30.)],
    );

    assert_eq!(
        causes(&result),
        vec![
            (0, BreakFailureCause::NoStart),
            (1, BreakFailureCause::PreviousBreak),
            (2, BreakFailureCause::PreviousBreak)
        ]
    );
    assert_eq!(result.remaining, None);
}

#[test]
fn can_detect_break_which_cannot_be_finished() {
    let result = walk((480., 560.), &[tw_break(hm(9, 0), hm(9, 20), 30.)]);

    assert_eq!(causes(&result), vec![(0, BreakFailureCause::NoFinish)]);
}

#[test]
fn can_finish_break_exactly_at_trip_end() {
    let result = walk((480., 570.), &[tw_break(hm(9, 0), hm(9, 30), 30.)]);

    assert!(result.failures.is_empty());
    assert_eq!(result.remaining, Some(TimeInterval::point(570.)));
}

parameterized_test! {can_classify_walk, (breaks, expected), {
    let sequence = BreakSequence::new(breaks.as_slice());
    let walk = walk_breaks(&sequence, &TimeInterval::new(480., 660.));

    let result = classify_walk(&walk, &sequence, DEFAULT_ROUTE_ID)
        .map_err(|diagnostic| (diagnostic.kind, diagnostic.message));

    assert_eq!(result, expected);
}}

can_classify_walk! {
    case01_ok: (vec![tw_break(hm(9, 0), hm(9, 30), 30.)], Ok(TimeInterval::new(570., 660.))),
    case02_single: (
        vec![tw_break(hm(7, 0), hm(7, 30), 30.)],
        Err((DiagnosticKind::BreakCannotBeVisited { index: 0 }, "the break cannot be visited".to_string()))
    ),
    case03_all: (
        vec![tw_break(hm(10, 0), hm(10, 30), 30.), tw_break(hm(7, 0), hm(7, 30), 30.)],
        Err((DiagnosticKind::AllBreaksCannotBeVisited, "all breaks cannot be visited".to_string()))
    ),
    case04_all_outside_trip: (
        vec![tw_break(hm(12, 0), hm(12, 30), 30.), tw_break(hm(6, 0), hm(6, 30), 30.)],
        Err((DiagnosticKind::AllBreaksCannotBeVisited, "all breaks cannot be visited".to_string()))
    ),
    case05_last: (
        vec![tw_break(hm(12, 0), hm(12, 30), 30.), tw_break(hm(9, 0), hm(9, 30), 30.)],
        Err((DiagnosticKind::LastBreakCannotBeVisited { index: 0 }, "the first break cannot be visited".to_string()))
    ),
    case06_subsequence: (
        vec![tw_break(hm(9, 0), hm(9, 30), 30.), tw_break(hm(11, 30), hm(12, 0), 30.), tw_break(hm(12, 0), hm(12, 30), 30.)],
        Err((
            DiagnosticKind::SubsequenceCannotBeVisited { index: 1 },
            "the second break and all breaks after it cannot be visited".to_string()
        ))
    ),
}

#[test]
fn can_display_failure_cause() {
    assert_eq!(BreakFailureCause::NoStart.to_string(), "cannot be started within its time window");
    assert_eq!(BreakFailureCause::PreviousBreak.to_string(), "a previous break cannot be visited");
}
