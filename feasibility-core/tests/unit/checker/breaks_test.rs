use super::*;
use crate::helpers::models::*;
use proptest::prelude::*;

#[test]
fn can_sort_breaks_keeping_original_indices() {
    let breaks = vec![
        tw_break(hm(12, 0), hm(12, 30), 30.),
        tw_break(hm(9, 0), hm(9, 30), 30.),
        tw_break(hm(10, 0), hm(10, 30), 30.),
    ];

    let sequence = BreakSequence::new(breaks.as_slice());

    assert_eq!(sequence.len(), 3);
    assert!(!sequence.is_empty());
    assert_eq!(sequence.original_indices(), &[1, 2, 0]);
    assert_eq!(sequence.original_index(0), 1);
    assert_eq!(sequence.get(0), Some(&breaks[1]));
    assert_eq!(sequence.get(3), None);
    assert_eq!(sequence.iter().map(|break_| break_.effective_start()).collect::<Vec<_>>(), vec![540., 600., 720.]);
}

#[test]
fn can_keep_input_order_for_breaks_with_same_start() {
    let breaks = vec![
        tw_break(hm(10, 0), hm(10, 30), 30.),
        tw_break(hm(9, 0), hm(9, 30), 30.),
        tw_break(hm(9, 0), hm(9, 45), 15.),
    ];

    let sequence = BreakSequence::new(breaks.as_slice());

    assert_eq!(sequence.original_indices(), &[1, 2, 0]);
    assert_eq!(sequence.find_original_index(hm(9, 0)), Some(1));
    assert_eq!(sequence.find_original_index(hm(11, 0)), None);
}

#[test]
fn can_create_empty_sequence() {
    let sequence = BreakSequence::new(&[]);

    assert!(sequence.is_empty());
    assert_eq!(sequence.iter().count(), 0);
}

parameterized_test! {can_get_ordinal_name, (index, expected), {
    assert_eq!(ordinal_name(index), expected);
}}

can_get_ordinal_name! {
    case01: (0, "first"),
    case02: (2, "third"),
    case03: (9, "tenth"),
    case04: (10, "11th"),
    case05: (12, "13th"),
    case06: (20, "21st"),
    case07: (21, "22nd"),
    case08: (22, "23rd"),
    case09: (110, "111th"),
    case10: (100, "101st"),
}

proptest! {
    #[test]
    fn can_map_sorted_breaks_back_to_input(starts in prop::collection::vec(0..2000_u32, 0..12)) {
        let breaks = starts
            .iter()
            .map(|&start| tw_break(start as Timestamp, start as Timestamp + 30., 10.))
            .collect::<Vec<_>>();

        let sequence = BreakSequence::new(breaks.as_slice());

        let mut indices = sequence.original_indices().to_vec();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..breaks.len()).collect::<Vec<_>>());

        for (position, break_) in sequence.iter().enumerate() {
            prop_assert_eq!(break_, &breaks[sequence.original_index(position)]);
        }

        let sorted_starts = sequence.iter().map(|break_| break_.effective_start()).collect::<Vec<_>>();
        prop_assert!(sorted_starts.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn can_find_original_index_by_distinct_start(starts in prop::collection::hash_set(0..2000_u32, 0..12)) {
        let breaks = starts
            .iter()
            .map(|&start| tw_break(start as Timestamp, start as Timestamp + 30., 10.))
            .collect::<Vec<_>>();

        let sequence = BreakSequence::new(breaks.as_slice());

        for (position, break_) in sequence.iter().enumerate() {
            let expected = Some(sequence.original_index(position));
            prop_assert_eq!(sequence.find_original_index(break_.effective_start()), expected);
        }

        prop_assert_eq!(sequence.find_original_index(-1.), None);
    }
}
