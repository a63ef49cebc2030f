use super::*;

#[test]
fn can_compare_floats() {
    assert_eq!(compare_floats(1., 2.), Ordering::Less);
    assert_eq!(compare_floats(2., 1.), Ordering::Greater);
    assert_eq!(compare_floats(1., 1.), Ordering::Equal);
}

#[test]
fn can_compare_floats_with_nan() {
    assert_eq!(compare_floats(Float::NAN, 1.), Ordering::Greater);
    assert_eq!(compare_floats(1., Float::NAN), Ordering::Less);
    assert_eq!(compare_floats(Float::NAN, Float::NAN), Ordering::Equal);
}
