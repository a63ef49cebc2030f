use super::*;

const ROUTES_JSON: &str = r#"
{
  "routes": [{
    "id": "route1",
    "start": { "times": [["08:00", "12:00"]], "duration": 15 },
    "end": { "times": [["16:00", "18:00"]], "duration": 10 },
    "shift": { "start": "08:00", "end": "09:00", "day": 0 },
    "maxDuration": 480,
    "breaks": [
      { "type": "timeWindow", "time": ["12:00", "13:00"], "duration": 30, "day": 0 },
      { "type": "driveTime", "interval": 240, "duration": 30 },
      { "type": "workTime", "interval": 300, "duration": 15 }
    ]
  }]
}
"#;

#[test]
fn can_deserialize_routes() {
    let plan = deserialize_routes(BufReader::new(ROUTES_JSON.as_bytes())).expect("cannot deserialize routes");

    assert_eq!(plan.routes.len(), 1);
    let route = &plan.routes[0];
    assert_eq!(route.id, "route1");
    assert_eq!(route.max_duration, Some(480.));
    assert_eq!(route.shift.day, Some(0));
    assert_eq!(route.start.as_ref().and_then(|start| start.duration), Some(15.));
    assert_eq!(route.end.as_ref().and_then(|end| end.times.clone()), Some(vec![vec!["16:00".to_string(), "18:00".to_string()]]));

    let breaks = route.breaks.as_ref().expect("no breaks");
    assert!(matches!(&breaks[0], RouteBreak::TimeWindow { time: Some(time), duration: Some(_), day: Some(0) } if time.len() == 2));
    assert!(matches!(breaks[1], RouteBreak::DriveTime { interval: Some(_), duration: Some(_) }));
    assert!(matches!(breaks[2], RouteBreak::WorkTime { interval: Some(_), duration: Some(_) }));
    assert_eq!(breaks[2].duration(), Some(15.));
}

#[test]
fn can_deserialize_minimal_route() {
    let json = r#"{ "routes": [{ "id": "route1", "shift": { "start": "08:00", "end": "08:00" } }] }"#;

    let plan = deserialize_routes(BufReader::new(json.as_bytes())).expect("cannot deserialize routes");

    let route = &plan.routes[0];
    assert!(route.start.is_none());
    assert!(route.end.is_none());
    assert!(route.breaks.is_none());
    assert!(route.max_duration.is_none());
}

parameterized_test! {can_reject_invalid_json, json, {
    let result = deserialize_routes(BufReader::new(json.as_bytes()));

    assert_eq!(result.err().map(|errors| errors.codes().join(",")), Some("E0000".to_string()));
}}

can_reject_invalid_json! {
    case01_broken: "{ \"routes\": [",
    case02_no_shift: r#"{ "routes": [{ "id": "route1" }] }"#,
    case03_unknown_break_type: r#"{ "routes": [{ "id": "r", "shift": { "start": "08:00", "end": "08:00" }, "breaks": [{ "type": "lunch", "duration": 1 }] }] }"#,
    case04_no_routes: "{}",
}
