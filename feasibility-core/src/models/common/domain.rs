#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::models::common::{Duration, MINUTES_PER_DAY, Timestamp};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Represents an immutable closed interval of time: both `start` and `end` belong to it.
///
/// The interval always satisfies `start <= end`: an attempt to create an interval which violates
/// it is a programming error and panics.
#[derive(Clone, Copy, Debug)]
pub struct TimeInterval {
    start: Timestamp,
    end: Timestamp,
}

impl TimeInterval {
    /// Creates a new [`TimeInterval`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        assert!(compare_floats(start, end) != Ordering::Greater, "time interval start {start} is after its end {end}");

        Self { start, end }
    }

    /// Creates an interval which consists of a single time point.
    pub fn point(time: Timestamp) -> Self {
        Self { start: time, end: time }
    }

    /// Returns an interval which represents "no constraint". Its end is kept at the half of max
    /// value, so the interval can be shifted forward without overflow.
    pub fn wide_open() -> Self {
        Self { start: Float::MIN, end: Float::MAX / 2. }
    }

    /// Returns interval start.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns interval end.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns interval length.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns an overlap of two intervals or `None` if there is no overlap. Touching
    /// intervals overlap in a single point.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if compare_floats(start, end) == Ordering::Greater { None } else { Some(Self { start, end }) }
    }

    /// Checks whether interval has an intersection with another one.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns a new interval with both bounds moved by `delta`.
    pub fn shift(&self, delta: Duration) -> Self {
        Self { start: self.start + delta, end: self.end + delta }
    }

    /// Checks whether given time belongs to the interval.
    pub fn contains(&self, time: Timestamp) -> bool {
        self.start <= time && time <= self.end
    }

    /// Checks whether another interval lies completely inside this one.
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns a new interval with given start.
    pub fn with_start(&self, start: Timestamp) -> Self {
        Self::new(start, self.end)
    }

    /// Returns a new interval with given end.
    pub fn with_end(&self, end: Timestamp) -> Self {
        Self::new(self.start, end)
    }
}

impl PartialEq<TimeInterval> for TimeInterval {
    fn eq(&self, other: &TimeInterval) -> bool {
        compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

impl Eq for TimeInterval {}

impl Hash for TimeInterval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let start = self.start.to_bits() as i64;
        let end = self.end.to_bits() as i64;

        start.hash(state);
        end.hash(state);
    }
}

impl Display for TimeInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", format_minutes(self.start), format_minutes(self.end))
    }
}

/// Represents a time window as it is specified on a location, a route or a break: time of day
/// bounds with a day offset. A window can be wide-open, which means it has no effect.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeWindow {
    /// Time of day when window starts, in minutes.
    pub start: Timestamp,
    /// Time of day when window ends, in minutes. If it is less than start, the window ends on
    /// the next day.
    pub end: Timestamp,
    /// A day offset: zero is the route's first day.
    pub day: u32,
    wide_open: bool,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`] on the first day.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end, day: 0, wide_open: false }
    }

    /// Creates a new [`TimeWindow`] on the given day.
    pub fn new_with_day(start: Timestamp, end: Timestamp, day: u32) -> Self {
        Self { start, end, day, wide_open: false }
    }

    /// Returns a wide-open time window.
    pub fn wide_open() -> Self {
        Self { start: 0., end: 0., day: 0, wide_open: true }
    }

    /// Returns true if the window doesn't constrain anything.
    pub fn is_wide_open(&self) -> bool {
        self.wide_open
    }

    /// Returns the window start as an offset from the route's first day.
    pub fn effective_start(&self) -> Timestamp {
        self.day as Float * MINUTES_PER_DAY + self.start
    }

    /// Returns the window end as an offset from the route's first day.
    pub fn effective_end(&self) -> Timestamp {
        let overnight = if self.end < self.start { MINUTES_PER_DAY } else { 0. };

        self.day as Float * MINUTES_PER_DAY + self.end + overnight
    }

    /// Converts window to a time interval. A wide-open window is converted to
    /// [`TimeInterval::wide_open`].
    pub fn to_interval(&self) -> TimeInterval {
        if self.wide_open {
            TimeInterval::wide_open()
        } else {
            TimeInterval::new(self.effective_start(), self.effective_end())
        }
    }
}

/// Formats time offset as `HH:MM` prefixed with a day number when it is not on the first day.
pub fn format_minutes(time: Timestamp) -> String {
    if time <= Float::MIN / 2. {
        return "-inf".to_string();
    }

    if time >= Float::MAX / 4. {
        return "+inf".to_string();
    }

    let total = time.round() as i64;
    let (day, minutes) = (total.div_euclid(MINUTES_PER_DAY as i64), total.rem_euclid(MINUTES_PER_DAY as i64));

    if day == 0 {
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    } else {
        format!("day {day} {:02}:{:02}", minutes / 60, minutes % 60)
    }
}
