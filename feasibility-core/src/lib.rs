//! Core crate contains building blocks to check whether a route with time windows and breaks
//! can actually be driven: started in time, with every break taken in sequence and finished at
//! the end location.
//!
//! Infeasibility is never reported as an error: the checker writes [`models::Diagnostic`]
//! records into a caller owned sink and returns a short summary.
//!
//! # Examples
//!
//! ```
//! use feasibility_core::prelude::*;
//!
//! let route = RouteBuilder::new("route1")
//!     .with_start_time_window(TimeWindow::new(480., 480.))
//!     .with_start_location(LocationTimes::wide_open())
//!     .with_max_total_duration(90.)
//!     .add_break(Break::time_window(TimeWindow::new(540., 570.), 30.))
//!     .build();
//!
//! let mut diagnostics = Vec::default();
//! let result = check_route(&route, &CheckerConfig::default(), &mut diagnostics);
//!
//! assert_eq!(result, CheckResult::Feasible);
//! assert!(diagnostics.is_empty());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod checker;
pub mod models;
pub mod prelude;
pub mod utils;
