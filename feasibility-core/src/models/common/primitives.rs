use crate::utils::Float;

/// Represents a time duration in minutes.
pub type Duration = Float;

/// Represents a timestamp as amount of minutes since midnight of the route's first day.
pub type Timestamp = Float;

/// Amount of minutes in one day.
pub const MINUTES_PER_DAY: Duration = 1440.;
