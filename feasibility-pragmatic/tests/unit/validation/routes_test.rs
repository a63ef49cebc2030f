use super::*;
use crate::helpers::*;

fn get_error_code(result: Result<(), FormatError>) -> Option<String> {
    result.err().map(|err| err.code)
}

#[test]
fn can_detect_duplicated_ids() {
    let plan = create_plan(vec![create_route("route1"), create_route("route2"), create_route("route1")]);
    let ctx = ValidationContext::new(&plan);

    let result = check_e1000_no_routes_with_duplicate_ids(&ctx);

    assert_eq!(result.as_ref().err().map(|err| err.action.contains("'route1'")), Some(true));
    assert_eq!(get_error_code(result), Some("E1000".to_string()));
}

parameterized_test! {can_detect_invalid_time_format, (route, expected), {
    let plan = create_plan(vec![route]);
    let ctx = ValidationContext::new(&plan);

    assert_eq!(get_error_code(check_e1001_time_format(&ctx)), expected.map(|code: &str| code.to_string()));
}}

can_detect_invalid_time_format! {
    case01_valid: (create_route("route1"), None),
    case02_shift: (Route { shift: create_shift("08:00", "9:00"), ..create_route("route1") }, Some("E1001")),
    case03_location: (Route { end: Some(create_location(&[("16:00", "25:00")], 0.)), ..create_route("route1") }, Some("E1001")),
    case04_break: (
        Route { breaks: Some(vec![create_time_window_break("12:00", "1pm", 30.)]), ..create_route("route1") },
        Some("E1001")
    ),
    case05_break_single_value: (
        Route {
            breaks: Some(vec![RouteBreak::TimeWindow { time: Some(vec!["12:00".to_string()]), duration: Some(30.), day: None }]),
            ..create_route("route1")
        },
        Some("E1001")
    ),
    case06_overnight: (Route { end: Some(create_location(&[("22:00", "02:00")], 0.)), ..create_route("route1") }, None),
}

parameterized_test! {can_detect_too_many_location_windows, (times, expected), {
    let times: &[(&str, &str)] = times;
    let plan = create_plan(vec![Route { start: Some(create_location(times, 0.)), ..create_route("route1") }]);
    let ctx = ValidationContext::new(&plan);

    assert_eq!(get_error_code(check_e1002_location_time_windows_amount(&ctx)), expected.map(|code: &str| code.to_string()));
}}

can_detect_too_many_location_windows! {
    case01_none: (&[], None),
    case02_two: (&[("08:00", "10:00"), ("12:00", "14:00")], None),
    case03_three: (&[("08:00", "10:00"), ("12:00", "14:00"), ("16:00", "18:00")], Some("E1002")),
}

parameterized_test! {can_detect_negative_durations, (route, expected), {
    let plan = create_plan(vec![route]);
    let ctx = ValidationContext::new(&plan);

    assert_eq!(get_error_code(check_e1003_no_negative_durations(&ctx)), expected.map(|code: &str| code.to_string()));
}}

can_detect_negative_durations! {
    case01_valid: (Route { max_duration: Some(0.), ..create_route("route1") }, None),
    case02_start: (Route { start: Some(create_location(&[], -1.)), ..create_route("route1") }, Some("E1003")),
    case03_end: (Route { end: Some(create_location(&[], -1.)), ..create_route("route1") }, Some("E1003")),
    case04_max_duration: (Route { max_duration: Some(-10.), ..create_route("route1") }, Some("E1003")),
    case05_break_duration: (
        Route { breaks: Some(vec![create_time_window_break("12:00", "13:00", -5.)]), ..create_route("route1") },
        Some("E1003")
    ),
    case06_break_interval: (
        Route { breaks: Some(vec![create_drive_time_break(-240., 30.)]), ..create_route("route1") },
        Some("E1003")
    ),
}

parameterized_test! {can_detect_missing_break_fields, (break_, expected), {
    let plan = create_plan(vec![Route { breaks: Some(vec![break_]), ..create_route("route1") }]);
    let ctx = ValidationContext::new(&plan);

    assert_eq!(get_error_code(check_e1004_break_required_fields(&ctx)), expected.map(|code: &str| code.to_string()));
}}

can_detect_missing_break_fields! {
    case01_valid_time_window: (create_time_window_break("12:00", "13:00", 30.), None),
    case02_valid_drive_time: (create_drive_time_break(240., 30.), None),
    case03_no_time: (RouteBreak::TimeWindow { time: None, duration: Some(30.), day: None }, Some("E1004")),
    case04_no_duration: (RouteBreak::TimeWindow { time: Some(vec![]), duration: None, day: None }, Some("E1004")),
    case05_no_interval: (RouteBreak::WorkTime { interval: None, duration: Some(30.) }, Some("E1004")),
}

#[test]
fn can_collect_all_errors() {
    let plan = create_plan(vec![
        Route { max_duration: Some(-1.), ..create_route("route1") },
        Route { shift: create_shift("08:00", "noon"), ..create_route("route1") },
    ]);

    let result = ValidationContext::new(&plan).validate();

    assert_eq!(result.err().map(|errors| errors.codes().join(",")), Some("E1000,E1001,E1003".to_string()));
}
