use super::*;

parameterized_test! {can_parse_time, (time, expected), {
    assert_eq!(parse_time(time).ok(), expected);
}}

can_parse_time! {
    case01_midnight: ("00:00", Some(0.)),
    case02_morning: ("08:30", Some(510.)),
    case03_last_minute: ("23:59", Some(1439.)),
    case04_no_padding: ("8:30", None),
    case05_out_of_range: ("24:00", None),
    case06_minutes_out_of_range: ("10:60", None),
    case07_text: ("noon", None),
    case08_empty: ("", None),
}

#[test]
fn can_describe_parse_error() {
    let error = parse_time("noon").expect_err("time should not be parsed");

    assert!(error.to_string().starts_with("cannot parse time 'noon'"));
}
