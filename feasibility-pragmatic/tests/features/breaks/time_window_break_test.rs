use crate::format::route::*;
use crate::helpers::*;

#[test]
fn can_visit_single_break_at_window_end() {
    let plan = create_plan(vec![Route {
        max_duration: Some(90.),
        breaks: Some(vec![create_time_window_break("09:00", "09:30", 30.)]),
        ..create_route("route1")
    }]);

    let report = check_plan(&plan).expect("cannot check plan");

    assert!(report.is_feasible());
    assert!(report.routes[0].diagnostics.is_empty());
}

#[test]
fn can_detect_break_before_route_start() {
    let plan = create_plan(vec![Route {
        max_duration: Some(90.),
        breaks: Some(vec![create_time_window_break("07:00", "07:30", 30.)]),
        ..create_route("route1")
    }]);

    let report = check_plan(&plan).expect("cannot check plan");

    let route = &report.routes[0];
    assert!(!route.feasible);
    assert_eq!(route.diagnostics.len(), 1);
    assert_eq!(route.diagnostics[0].code, "D102");
    assert_eq!(route.diagnostics[0].break_index, Some(0));
}

#[test]
fn can_detect_zero_slack_break_with_end_location() {
    let create = |max_duration: f64| Route {
        id: format!("route{max_duration}"),
        end: Some(create_location(&[], 30.)),
        max_duration: Some(max_duration),
        breaks: Some(vec![create_time_window_break("09:00", "09:30", 30.)]),
        ..create_route("route")
    };
    let plan = create_plan(vec![create(120.), create(119.)]);

    let report = check_plan(&plan).expect("cannot check plan");

    assert!(report.routes[0].feasible);
    assert!(!report.routes[1].feasible);
    assert_eq!(report.routes[1].diagnostics[0].code, "D102");
}

#[test]
fn can_name_failed_break_by_input_position() {
    let plan = create_plan(vec![Route {
        max_duration: Some(180.),
        breaks: Some(vec![
            create_time_window_break("12:00", "12:10", 30.),
            create_time_window_break("09:00", "09:30", 30.),
            create_time_window_break("11:40", "11:50", 30.),
        ]),
        ..create_route("route1")
    }]);

    let report = check_plan(&plan).expect("cannot check plan");

    let diagnostic = &report.routes[0].diagnostics[0];
    assert_eq!(diagnostic.code, "D105");
    assert_eq!(diagnostic.break_index, Some(2));
    assert_eq!(diagnostic.message, "the third break and all breaks after it cannot be visited");
}

#[test]
fn can_detect_all_breaks_cannot_be_visited() {
    let plan = create_plan(vec![Route {
        max_duration: Some(180.),
        breaks: Some(vec![
            create_time_window_break("10:00", "10:30", 30.),
            create_time_window_break("06:00", "06:30", 30.),
        ]),
        ..create_route("route1")
    }]);

    let report = check_plan(&plan).expect("cannot check plan");

    assert_eq!(report.routes[0].diagnostics[0].code, "D103");
    assert_eq!(report.routes[0].diagnostics[0].break_index, None);
}

#[test]
fn can_report_overlapping_break_windows_as_invalid() {
    let plan = create_plan(vec![Route {
        breaks: Some(vec![
            create_time_window_break("09:00", "10:00", 30.),
            create_time_window_break("09:30", "10:30", 30.),
        ]),
        ..create_route("route1")
    }]);

    let report = check_plan(&plan).expect("cannot check plan");

    assert!(!report.routes[0].feasible);
    assert_eq!(report.routes[0].diagnostics.iter().map(|d| d.code.as_str()).collect::<Vec<_>>(), vec!["D202"]);
}

#[test]
fn can_visit_break_on_next_day() {
    let plan = create_plan(vec![Route {
        shift: create_shift("22:00", "22:00"),
        max_duration: Some(300.),
        breaks: Some(vec![RouteBreak::TimeWindow {
            time: Some(vec!["01:00".to_string(), "02:00".to_string()]),
            duration: Some(45.),
            day: Some(1),
        }]),
        ..create_route("route1")
    }]);

    let report = check_plan(&plan).expect("cannot check plan");

    assert!(report.is_feasible());
}
