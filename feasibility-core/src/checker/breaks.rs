#[cfg(test)]
#[path = "../../tests/unit/checker/breaks_test.rs"]
mod breaks_test;

use crate::models::Break;
use crate::models::common::Timestamp;
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Keeps route breaks in chronological order together with their original positions.
pub struct BreakSequence<'a> {
    breaks: &'a [Break],
    sorted: Vec<usize>,
}

impl<'a> BreakSequence<'a> {
    /// Creates a new sequence sorted by break effective start. The sort is stable: breaks with
    /// the same start keep their input order.
    pub fn new(breaks: &'a [Break]) -> Self {
        let mut sorted = (0..breaks.len()).collect::<Vec<_>>();
        sorted.sort_by(|&a, &b| compare_floats(breaks[a].effective_start(), breaks[b].effective_start()));

        Self { breaks, sorted }
    }

    /// Returns amount of breaks.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Returns true if there are no breaks.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Returns a break at given chronological position.
    pub fn get(&self, position: usize) -> Option<&'a Break> {
        self.sorted.get(position).map(|&index| &self.breaks[index])
    }

    /// Returns breaks in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Break> + '_ {
        self.sorted.iter().map(|&index| &self.breaks[index])
    }

    /// Returns original indices in chronological order.
    pub fn original_indices(&self) -> &[usize] {
        self.sorted.as_slice()
    }

    /// Returns the original index of the break at given chronological position.
    ///
    /// Panics if position is out of range.
    pub fn original_index(&self, position: usize) -> usize {
        self.sorted[position]
    }

    /// Finds the original index of the first break, in input order, which starts at given time.
    pub fn find_original_index(&self, effective_start: Timestamp) -> Option<usize> {
        self.breaks
            .iter()
            .position(|break_| compare_floats(break_.effective_start(), effective_start) == Ordering::Equal)
    }
}

/// Returns an ordinal name of the break at given zero based index: "first", "second", etc.
pub fn ordinal_name(index: usize) -> String {
    const NAMES: [&str; 10] =
        ["first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth"];

    if let Some(name) = NAMES.get(index) {
        return name.to_string();
    }

    let number = index + 1;
    let suffix = match (number % 10, number % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };

    format!("{number}{suffix}")
}
