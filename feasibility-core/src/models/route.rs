#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use crate::models::common::{Duration, TimeInterval, TimeWindow, Timestamp};

/// Specifies up to two time windows of a location. A wide-open second window means that the
/// location has only one window; if both are wide-open, the location is not constrained.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationTimes {
    /// First time window.
    pub window1: TimeWindow,
    /// Second time window.
    pub window2: TimeWindow,
}

impl LocationTimes {
    /// Creates a location with one time window.
    pub fn new(window: TimeWindow) -> Self {
        Self { window1: window, window2: TimeWindow::wide_open() }
    }

    /// Creates a location with two time windows.
    pub fn new_with_windows(window1: TimeWindow, window2: TimeWindow) -> Self {
        Self { window1, window2 }
    }

    /// Creates a location which is never constrained.
    pub fn wide_open() -> Self {
        Self { window1: TimeWindow::wide_open(), window2: TimeWindow::wide_open() }
    }

    /// Returns both time windows.
    pub fn windows(&self) -> impl Iterator<Item = &TimeWindow> {
        [&self.window1, &self.window2].into_iter()
    }

    /// Returns effective intervals of the windows which are not wide-open.
    pub fn constrained_intervals(&self) -> Vec<TimeInterval> {
        self.windows().filter(|window| !window.is_wide_open()).map(|window| window.to_interval()).collect()
    }

    /// Returns true if at least one window constrains the location.
    pub fn is_constrained(&self) -> bool {
        self.windows().any(|window| !window.is_wide_open())
    }
}

/// Specifies a break kind.
#[derive(Clone, Debug, PartialEq)]
pub enum BreakKind {
    /// A break which has to be started within a fixed time window.
    TimeWindow {
        /// A time window when break should start.
        window: TimeWindow,
    },
    /// A break which has to be taken after given amount of driving time.
    DriveTime {
        /// Cumulative drive time after which the break is taken.
        interval: Duration,
    },
    /// A break which has to be taken after given amount of work time.
    WorkTime {
        /// Cumulative work time after which the break is taken.
        interval: Duration,
    },
}

/// A mandatory rest stop on the route.
#[derive(Clone, Debug, PartialEq)]
pub struct Break {
    /// Break kind.
    pub kind: BreakKind,
    /// Break duration in minutes.
    pub duration: Duration,
}

impl Break {
    /// Creates a time window break.
    pub fn time_window(window: TimeWindow, duration: Duration) -> Self {
        Self { kind: BreakKind::TimeWindow { window }, duration }
    }

    /// Creates a drive time break.
    pub fn drive_time(interval: Duration, duration: Duration) -> Self {
        Self { kind: BreakKind::DriveTime { interval }, duration }
    }

    /// Creates a work time break.
    pub fn work_time(interval: Duration, duration: Duration) -> Self {
        Self { kind: BreakKind::WorkTime { interval }, duration }
    }

    /// Returns the break time window if it is a time window break.
    pub fn as_time_window(&self) -> Option<&TimeWindow> {
        match &self.kind {
            BreakKind::TimeWindow { window } => Some(window),
            BreakKind::DriveTime { .. } | BreakKind::WorkTime { .. } => None,
        }
    }

    /// Returns true if this is a time window break.
    pub fn is_time_window(&self) -> bool {
        self.as_time_window().is_some()
    }

    /// Returns the value used to order breaks chronologically: window start for time window
    /// breaks, the interval for drive and work time breaks.
    pub fn effective_start(&self) -> Timestamp {
        match &self.kind {
            BreakKind::TimeWindow { window } => window.to_interval().start(),
            BreakKind::DriveTime { interval } | BreakKind::WorkTime { interval } => *interval,
        }
    }

    /// Returns a short break kind name.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            BreakKind::TimeWindow { .. } => "time window",
            BreakKind::DriveTime { .. } => "drive time",
            BreakKind::WorkTime { .. } => "work time",
        }
    }
}

/// A read-only snapshot of a route which is a subject of the feasibility check.
#[derive(Clone, Debug)]
pub struct RouteDescriptor {
    /// Route identifier used as a diagnostic subject.
    pub id: String,
    /// Start location time windows, if the route has a start location.
    pub start_location: Option<LocationTimes>,
    /// End location time windows, if the route has an end location.
    pub end_location: Option<LocationTimes>,
    /// A time window when the route starts. It is never wide-open.
    pub start_time_window: TimeWindow,
    /// A time spent at the start location.
    pub time_at_start: Duration,
    /// A time spent at the end location.
    pub time_at_end: Duration,
    /// Max total duration of the route, zero means no limit.
    pub max_total_duration: Duration,
    /// Breaks in the order they were specified.
    pub breaks: Vec<Break>,
}

impl RouteDescriptor {
    /// Returns time at start if start location is present, zero otherwise.
    pub fn effective_time_at_start(&self) -> Duration {
        if self.start_location.is_some() { self.time_at_start } else { 0. }
    }

    /// Returns time at end if end location is present, zero otherwise.
    pub fn effective_time_at_end(&self) -> Duration {
        if self.end_location.is_some() { self.time_at_end } else { 0. }
    }

    /// Returns true if the first break is a time window break.
    pub fn has_time_window_breaks(&self) -> bool {
        self.breaks.first().is_some_and(|break_| break_.is_time_window())
    }
}

/// Provides the way to build a [`RouteDescriptor`].
pub struct RouteBuilder {
    route: RouteDescriptor,
}

impl RouteBuilder {
    /// Creates a new builder for the route with given id. By default, the route has no locations,
    /// no breaks, unlimited duration and starts at midnight.
    pub fn new(id: &str) -> Self {
        Self {
            route: RouteDescriptor {
                id: id.to_string(),
                start_location: None,
                end_location: None,
                start_time_window: TimeWindow::new(0., 0.),
                time_at_start: 0.,
                time_at_end: 0.,
                max_total_duration: 0.,
                breaks: vec![],
            },
        }
    }

    /// Sets start location.
    pub fn with_start_location(mut self, location: LocationTimes) -> Self {
        self.route.start_location = Some(location);
        self
    }

    /// Sets end location.
    pub fn with_end_location(mut self, location: LocationTimes) -> Self {
        self.route.end_location = Some(location);
        self
    }

    /// Sets route start time window.
    pub fn with_start_time_window(mut self, window: TimeWindow) -> Self {
        self.route.start_time_window = window;
        self
    }

    /// Sets time spent at the start location.
    pub fn with_time_at_start(mut self, duration: Duration) -> Self {
        self.route.time_at_start = duration;
        self
    }

    /// Sets time spent at the end location.
    pub fn with_time_at_end(mut self, duration: Duration) -> Self {
        self.route.time_at_end = duration;
        self
    }

    /// Sets max total duration, zero means unlimited.
    pub fn with_max_total_duration(mut self, duration: Duration) -> Self {
        self.route.max_total_duration = duration;
        self
    }

    /// Adds a break.
    pub fn add_break(mut self, break_: Break) -> Self {
        self.route.breaks.push(break_);
        self
    }

    /// Adds multiple breaks.
    pub fn add_breaks(mut self, breaks: impl IntoIterator<Item = Break>) -> Self {
        self.route.breaks.extend(breaks);
        self
    }

    /// Builds a route.
    pub fn build(self) -> RouteDescriptor {
        self.route
    }
}
