//! Pragmatic crate allows to describe routes in a simple **pragmatic** json format, check them
//! in batches and get a json report back.
//!
//! # Examples
//!
//! ```
//! use feasibility_pragmatic::checker::check_json;
//! use feasibility_pragmatic::core::prelude::CheckerConfig;
//! use std::io::BufReader;
//!
//! let routes = r#"{
//!   "routes": [{
//!     "id": "route1",
//!     "start": { "duration": 0 },
//!     "shift": { "start": "08:00", "end": "08:00" },
//!     "maxDuration": 90,
//!     "breaks": [{ "type": "timeWindow", "time": ["09:00", "09:30"], "duration": 30 }]
//!   }]
//! }"#;
//!
//! let report = check_json(BufReader::new(routes.as_bytes()), &CheckerConfig::default()).unwrap();
//!
//! assert!(report.routes[0].feasible);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub use feasibility_core as core;

pub mod checker;
pub mod format;

mod utils;
mod validation;

use feasibility_core::models::common::Timestamp;
use feasibility_core::utils::GenericResult;
use time::Time;
use time::format_description;

const TIME_FORMAT: &str = "[hour]:[minute]";

/// Parses time of day in `HH:MM` format into minutes since midnight.
pub fn parse_time(time: &str) -> GenericResult<Timestamp> {
    let format = format_description::parse(TIME_FORMAT).map_err(|err| err.to_string())?;
    let parsed = Time::parse(time, &format).map_err(|err| format!("cannot parse time '{time}': {err}"))?;

    Ok((parsed.hour() as u32 * 60 + parsed.minute() as u32) as Timestamp)
}
